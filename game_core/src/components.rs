use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng, Rect};

/// Which end of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Who moves a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Keyboard or touch input
    Human,
    /// Chases the ball one step per tick
    Ai,
}

/// Paddle component - one per side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub bounds: Rect,
    /// Signed pixels per tick for humans, step size for the AI
    pub speed: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, bounds: Rect, speed: f32) -> Self {
        Self {
            side,
            bounds,
            speed,
            score: 0,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub bounds: Rect,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(bounds: Rect, vel: Vec2) -> Self {
        Self { bounds, vel }
    }

    /// Ball at the centre moving diagonally at `speed` on each axis,
    /// each sign picked independently
    pub fn serve(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(config.ball_spawn(), Vec2::ZERO);
        ball.reset(config, rng);
        ball
    }

    /// Re-serve from the centre with a fresh random direction
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        let sign_x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sign_y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.bounds = config.ball_spawn();
        self.vel = Vec2::new(sign_x, sign_y) * config.ball_speed;
    }
}

/// Vertical movement direction for keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Sign of the speed change a key press produces (screen y grows downward)
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }
}

/// Input event addressed to a paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleInput {
    Press(Side, Direction),
    Release(Side, Direction),
    /// Touch or pointer drag setting the paddle's vertical centre
    Drag(Side, f32),
}

impl PaddleInput {
    pub fn side(&self) -> Side {
        match *self {
            PaddleInput::Press(side, _) | PaddleInput::Release(side, _) => side,
            PaddleInput::Drag(side, _) => side,
        }
    }
}
