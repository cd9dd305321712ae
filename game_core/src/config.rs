use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Params, Rect, Side};

/// What happens to the ball after a point is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServeRule {
    /// Ball keeps moving, its horizontal velocity flipped and damped
    #[default]
    Continuous,
    /// Ball is served again from the centre with a fresh random direction
    ResetToCenter,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub frame_rate: u32,
    pub ball_speed: f32,
    pub ball_size: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub win_score: u32,
    pub win_delay_secs: f32,
    pub serve_rule: ServeRule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            frame_rate: Params::FRAME_RATE,
            ball_speed: Params::BALL_SPEED,
            ball_size: Params::BALL_SIZE,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            win_score: Params::WIN_SCORE,
            win_delay_secs: Params::WIN_DELAY_SECS,
            serve_rule: ServeRule::Continuous,
        }
    }
}

/// Settings the host page may change. The physics beyond the serve speed and
/// the win threshold stay fixed; anything else is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigOverrides {
    ball_speed: Option<f32>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning sized to the given screen
    pub fn for_playfield(width: f32, height: f32) -> Self {
        Self {
            playfield_width: width,
            playfield_height: height,
            ..Self::default()
        }
    }

    /// Screen-sized config with the host's JSON overrides, validated
    pub fn from_json(json: &str, width: f32, height: f32) -> Result<Self, ConfigError> {
        let overrides: ConfigOverrides = serde_json::from_str(json)?;
        let mut config = Self::for_playfield(width, height);

        if let Some(speed) = overrides.ball_speed {
            config.ball_speed = speed;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the clamp and collision rules cannot handle
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("ball_speed", self.ball_speed),
            ("ball_size", self.ball_size),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !self.win_delay_secs.is_finite() || self.win_delay_secs < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "win_delay_secs",
                value: self.win_delay_secs,
            });
        }
        if self.paddle_height > self.playfield_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                playfield: self.playfield_height,
            });
        }
        if self.ball_size >= self.playfield_height || self.ball_size >= self.playfield_width {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_size,
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }

    /// Seconds per simulation tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.frame_rate.max(1) as f32
    }

    /// Number of ticks the win banner stays up
    pub fn win_delay_ticks(&self) -> u32 {
        (self.win_delay_secs * self.frame_rate as f32).round() as u32
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.playfield_width - self.paddle_width,
        }
    }

    /// Paddle bounds at the start of a match, vertically centred
    pub fn paddle_spawn(&self, side: Side) -> Rect {
        let y = ((self.playfield_height - self.paddle_height) / 2.0).floor();
        Rect::new(self.paddle_x(side), y, self.paddle_width, self.paddle_height)
    }

    /// Ball bounds at serve time
    pub fn ball_spawn(&self) -> Rect {
        let center = Vec2::new(
            (self.playfield_width / 2.0).floor(),
            (self.playfield_height / 2.0).floor(),
        );
        Rect::from_center_size(center, Vec2::splat(self.ball_size))
    }

    /// Clamp paddle bounds to the playfield.
    ///
    /// The two edges are clamped one after the other, so a paddle taller than
    /// the playfield ends up flush with the bottom. `validate` rejects that case.
    pub fn clamp_paddle(&self, bounds: &mut Rect) {
        bounds.set_top(bounds.top().max(0.0));
        bounds.set_bottom(bounds.bottom().min(self.playfield_height));
    }
}
