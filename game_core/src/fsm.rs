//! Game State Machine
//!
//! Menus, match start and the end screen. The host steps it once per tick
//! and feeds it actions; no state ever blocks or calls into another.

use crate::{
    Config, FrameView, MenuView, Mode, PaddleInput, Session, Versus, View, MAIN_MENU_OPTIONS,
};

const MENU_LEN: usize = MAIN_MENU_OPTIONS.len();

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    MainMenu,
    VersusMenu,
    Arcade,
    Endless,
    EndScreen,
    Exited,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Up,
    Down,
    Confirm,
    Back,
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: FsmState,
    to_state: FsmState,
    action: GameAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> FsmState {
        self.from_state
    }

    pub fn to_state(&self) -> FsmState {
        self.to_state
    }

    pub fn action(&self) -> GameAction {
        self.action
    }
}

fn main_choice(selected: usize) -> Option<Mode> {
    match selected {
        0 => Some(Mode::Arcade),
        1 => Some(Mode::Endless),
        _ => None,
    }
}

fn versus_choice(selected: usize) -> Option<Versus> {
    match selected {
        0 => Some(Versus::Ai),
        1 => Some(Versus::Player),
        _ => None,
    }
}

/// Game Finite State Machine
pub struct GameFsm {
    state: FsmState,
    selected: usize,
    mode: Mode,
    config: Config,
    session: Option<Session>,
    end_ticks_left: u32,
    /// Quit pressed on the end screen, honoured once the delay runs out
    quit_pending: bool,
    seed: u64,
    matches: u64,
}

impl GameFsm {
    pub fn new(config: Config, seed: u64) -> Self {
        Self {
            state: FsmState::MainMenu,
            selected: 0,
            mode: Mode::Arcade,
            config,
            session: None,
            end_ticks_left: 0,
            quit_pending: false,
            seed,
            matches: 0,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Get current state as string (for JS interop)
    pub fn state_string(&self) -> String {
        format!("{:?}", self.state)
    }

    /// Highlighted menu option
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        let Some(next_state) = self.get_next_state(action) else {
            return TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            };
        };

        self.apply(action, next_state);
        if next_state != from_state {
            log::info!("{:?} -> {:?} on {:?}", from_state, next_state, action);
        }

        TransitionResult {
            success: true,
            from_state,
            to_state: next_state,
            action,
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            // The end screen waits out its delay; a quit is held until then
            (FsmState::EndScreen, GameAction::Quit) => Some(FsmState::EndScreen),
            (FsmState::EndScreen, _) | (FsmState::Exited, _) => None,

            (_, GameAction::Quit) => Some(FsmState::Exited),

            // Menu navigation
            (FsmState::MainMenu | FsmState::VersusMenu, GameAction::Up | GameAction::Down) => {
                Some(self.state)
            }

            (FsmState::MainMenu, GameAction::Confirm) => Some(match main_choice(self.selected) {
                Some(_) => FsmState::VersusMenu,
                None => FsmState::Exited,
            }),

            (FsmState::VersusMenu, GameAction::Confirm) => {
                Some(match (versus_choice(self.selected), self.mode) {
                    (None, _) => FsmState::Exited,
                    (Some(_), Mode::Arcade) => FsmState::Arcade,
                    (Some(_), Mode::Endless) => FsmState::Endless,
                })
            }

            (FsmState::VersusMenu | FsmState::Arcade | FsmState::Endless, GameAction::Back) => {
                Some(FsmState::MainMenu)
            }

            // Invalid transition
            _ => None,
        }
    }

    fn apply(&mut self, action: GameAction, next_state: FsmState) {
        match action {
            GameAction::Up => self.selected = self.selected.saturating_sub(1),
            GameAction::Down => self.selected = (self.selected + 1).min(MENU_LEN - 1),
            GameAction::Confirm => match self.state {
                FsmState::MainMenu => {
                    if let Some(mode) = main_choice(self.selected) {
                        self.mode = mode;
                        self.selected = 0;
                    }
                }
                FsmState::VersusMenu => {
                    if let Some(versus) = versus_choice(self.selected) {
                        self.start_match(versus);
                    }
                }
                _ => {}
            },
            GameAction::Back => {
                self.session = None;
                self.selected = 0;
            }
            GameAction::Quit => {
                if self.state == FsmState::EndScreen {
                    log::info!("quit held until the end screen closes");
                    self.quit_pending = true;
                }
            }
        }

        if next_state == FsmState::Exited {
            self.session = None;
        }
        self.state = next_state;
    }

    fn start_match(&mut self, versus: Versus) {
        let seed = self.seed.wrapping_add(self.matches);
        self.matches += 1;
        self.session = Some(Session::new(self.config.clone(), self.mode, versus, seed));
    }

    /// Advance one tick: play a frame, or count down the end screen
    pub fn tick(&mut self) -> FsmState {
        match self.state {
            FsmState::Arcade | FsmState::Endless => {
                let Some(session) = self.session.as_mut() else {
                    return self.state;
                };
                if session.tick().is_some() {
                    log::info!(
                        "{:?} -> EndScreen ({})",
                        self.state,
                        session.banner().unwrap_or_default()
                    );
                    self.end_ticks_left = self.config.win_delay_ticks();
                    self.state = FsmState::EndScreen;
                }
            }
            FsmState::EndScreen => {
                self.end_ticks_left = self.end_ticks_left.saturating_sub(1);
                if self.end_ticks_left == 0 && self.quit_pending {
                    log::info!("EndScreen -> Exited");
                    self.session = None;
                    self.state = FsmState::Exited;
                } else if self.end_ticks_left == 0 {
                    log::info!("EndScreen -> MainMenu");
                    self.reset();
                }
            }
            FsmState::MainMenu | FsmState::VersusMenu | FsmState::Exited => {}
        }
        self.state
    }

    /// Forward a paddle input to the running match. Returns false when no
    /// match is being played.
    pub fn paddle_input(&mut self, input: PaddleInput) -> bool {
        match (self.state, self.session.as_mut()) {
            (FsmState::Arcade | FsmState::Endless, Some(session)) => {
                session.push_input(input);
                true
            }
            _ => false,
        }
    }

    /// What to draw for the current state
    pub fn view(&self) -> View {
        match self.state {
            FsmState::MainMenu => View::Menu(MenuView::main(self.selected)),
            FsmState::VersusMenu => View::Menu(MenuView::versus(self.selected)),
            FsmState::Arcade | FsmState::Endless | FsmState::EndScreen => self
                .session
                .as_ref()
                .and_then(FrameView::from_session)
                .map(View::Frame)
                .unwrap_or_else(|| View::Menu(MenuView::main(self.selected))),
            FsmState::Exited => View::Exited,
        }
    }

    /// Back to the main menu, discarding any match
    pub fn reset(&mut self) {
        self.state = FsmState::MainMenu;
        self.selected = 0;
        self.session = None;
        self.end_ticks_left = 0;
        self.quit_pending = false;
    }

    /// Check if currently in a playing state
    pub fn is_playing(&self) -> bool {
        matches!(self.state, FsmState::Arcade | FsmState::Endless)
    }

    pub fn is_exited(&self) -> bool {
        self.state == FsmState::Exited
    }
}
