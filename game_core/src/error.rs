use thiserror::Error;

/// Rejected game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit a playfield {playfield} pixels tall")]
    PaddleTooTall { paddle: f32, playfield: f32 },

    #[error("ball size {ball} does not fit a {width}x{height} playfield")]
    BallTooLarge { ball: f32, width: f32, height: f32 },

    #[error("frame rate must be at least 1")]
    ZeroFrameRate,

    #[error("win score must be at least 1")]
    ZeroWinScore,
}
