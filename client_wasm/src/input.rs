//! Keyboard and touch input handling

use std::collections::HashMap;

use game_core::{Direction, GameAction, PaddleInput, Side};

/// Menu/navigation action bound to a key
pub fn menu_action(key: &str) -> Option<GameAction> {
    match key {
        "ArrowUp" => Some(GameAction::Up),
        "ArrowDown" => Some(GameAction::Down),
        "Enter" => Some(GameAction::Confirm),
        "Backspace" => Some(GameAction::Back),
        "Escape" => Some(GameAction::Quit),
        _ => None,
    }
}

/// Paddle bound to a key: arrows for the right paddle, w/s for the left
pub fn paddle_key(key: &str) -> Option<(Side, Direction)> {
    match key {
        "ArrowUp" => Some((Side::Right, Direction::Up)),
        "ArrowDown" => Some((Side::Right, Direction::Down)),
        "w" | "W" => Some((Side::Left, Direction::Up)),
        "s" | "S" => Some((Side::Left, Direction::Down)),
        _ => None,
    }
}

/// Paddle keys currently held.
///
/// Browsers repeat keydown while a key is held; only the first one becomes a
/// press, and a release is only emitted for a key that produced a press.
#[derive(Debug, Default)]
pub struct PaddleKeys {
    held: HashMap<String, (Side, Direction)>,
}

impl PaddleKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) -> Option<PaddleInput> {
        let binding = paddle_key(key)?;
        if self.held.contains_key(key) {
            return None;
        }
        self.held.insert(key.to_string(), binding);
        Some(PaddleInput::Press(binding.0, binding.1))
    }

    pub fn release(&mut self, key: &str) -> Option<PaddleInput> {
        self.held
            .remove(key)
            .map(|(side, dir)| PaddleInput::Release(side, dir))
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains_key(key)
    }

    /// Forget held keys, e.g. when a new match starts with still paddles
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Touch at `x` drags the paddle on that third of the screen to `y`
pub fn touch_input(x: f32, y: f32, width: f32) -> Option<PaddleInput> {
    if x > width * 2.0 / 3.0 {
        Some(PaddleInput::Drag(Side::Right, y))
    } else if x < width / 3.0 {
        Some(PaddleInput::Drag(Side::Left, y))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_keys() {
        assert_eq!(menu_action("Enter"), Some(GameAction::Confirm));
        assert_eq!(menu_action("Backspace"), Some(GameAction::Back));
        assert_eq!(menu_action("Escape"), Some(GameAction::Quit));
        assert_eq!(menu_action("w"), None);
    }

    #[test]
    fn test_paddle_keys() {
        assert_eq!(paddle_key("ArrowUp"), Some((Side::Right, Direction::Up)));
        assert_eq!(paddle_key("S"), Some((Side::Left, Direction::Down)));
        assert_eq!(paddle_key("Enter"), None);
    }

    #[test]
    fn test_repeat_keydown_is_one_press() {
        let mut keys = PaddleKeys::new();
        assert_eq!(
            keys.press("w"),
            Some(PaddleInput::Press(Side::Left, Direction::Up))
        );
        assert_eq!(keys.press("w"), None);
        assert!(keys.is_held("w"));
        assert_eq!(
            keys.release("w"),
            Some(PaddleInput::Release(Side::Left, Direction::Up))
        );
        assert_eq!(keys.release("w"), None);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut keys = PaddleKeys::new();
        keys.press("ArrowDown");
        keys.clear();
        assert_eq!(keys.release("ArrowDown"), None);
    }

    #[test]
    fn test_touch_thirds() {
        assert_eq!(
            touch_input(1000.0, 200.0, 1280.0),
            Some(PaddleInput::Drag(Side::Right, 200.0))
        );
        assert_eq!(
            touch_input(100.0, 50.0, 1280.0),
            Some(PaddleInput::Drag(Side::Left, 50.0))
        );
        assert_eq!(touch_input(640.0, 50.0, 1280.0), None);
    }
}
