//! What the renderer draws: plain data, no rendering dependency

use crate::{Rect, Session, Side};

pub const MAIN_MENU_TITLE: &str = "PONG";
pub const MAIN_MENU_OPTIONS: [&str; 3] = ["arcade", "endless", "quit"];
pub const VERSUS_MENU_TITLE: &str = "VERSUS";
pub const VERSUS_MENU_OPTIONS: [&str; 3] = ["ai", "player", "quit"];

/// A menu screen; the selected option is drawn highlighted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub title: &'static str,
    pub options: &'static [&'static str],
    pub selected: usize,
}

impl MenuView {
    pub fn main(selected: usize) -> Self {
        Self {
            title: MAIN_MENU_TITLE,
            options: &MAIN_MENU_OPTIONS,
            selected,
        }
    }

    pub fn versus(selected: usize) -> Self {
        Self {
            title: VERSUS_MENU_TITLE,
            options: &VERSUS_MENU_OPTIONS,
            selected,
        }
    }

    pub fn selected_option(&self) -> &'static str {
        self.options[self.selected.min(self.options.len() - 1)]
    }
}

/// A gameplay frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub playfield: Rect,
    pub left: Rect,
    pub right: Rect,
    /// Drawn as the ellipse inscribed in this rectangle
    pub ball: Rect,
    pub left_label: String,
    pub right_label: String,
    pub banner: Option<String>,
}

impl FrameView {
    pub fn from_session(session: &Session) -> Option<Self> {
        let left = session.paddle(Side::Left)?;
        let right = session.paddle(Side::Right)?;
        let ball = session.ball()?;
        let config = &session.config;

        Some(Self {
            playfield: Rect::new(0.0, 0.0, config.playfield_width, config.playfield_height),
            left: left.bounds,
            right: right.bounds,
            ball: ball.bounds,
            left_label: session.score_label(Side::Left),
            right_label: session.score_label(Side::Right),
            banner: session.banner(),
        })
    }
}

/// Everything the host needs to draw the current tick
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Menu(MenuView),
    Frame(FrameView),
    Exited,
}
