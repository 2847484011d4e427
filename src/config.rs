//! Startup configuration
//!
//! The game exposes no runtime configuration surface; everything is fixed at
//! startup. Validation exists so a bad edit to the constants fails fast at
//! launch instead of producing a degenerate simulation.

use thiserror::Error;

use crate::consts::*;

/// Rejected startup configuration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("playfield must have positive dimensions, got {width}x{height}")]
    DegeneratePlayfield { width: f32, height: f32 },

    #[error("paddle {paddle_width}x{paddle_height} does not fit the {width}x{height} playfield")]
    PaddleTooLarge {
        paddle_width: f32,
        paddle_height: f32,
        width: f32,
        height: f32,
    },

    #[error("ball radius must be positive, got {0}")]
    DegenerateBall(f32),

    #[error("ball diameter {diameter} exceeds playfield height {height}")]
    BallTooLarge { diameter: f32, height: f32 },

    #[error("tick rate must be positive")]
    ZeroTickRate,

    #[error("win score must be positive")]
    ZeroWinScore,
}

/// Fixed match configuration, captured once at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between each paddle and its side wall
    pub paddle_margin: f32,
    /// Velocity change per tick while a button is held
    pub paddle_accel: f32,
    pub ball_radius: f32,
    /// Horizontal speed the ball is served with, per tick
    pub serve_speed: f32,
    /// Per-axis ball speed cap
    pub max_speed: f32,
    /// First side to reach this score wins
    pub win_score: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Pause between a point and the next serve, in seconds
    pub pause_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_accel: PADDLE_ACCEL,
            ball_radius: BALL_RADIUS,
            serve_speed: BALL_SERVE_SPEED,
            max_speed: BALL_MAX_SPEED,
            win_score: WIN_SCORE,
            tick_rate: TICK_RATE,
            pause_secs: SCORED_PAUSE_SECS,
        }
    }
}

impl Config {
    /// Reject degenerate geometry and match parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::DegeneratePlayfield {
                width: self.width,
                height: self.height,
            });
        }
        if self.paddle_width <= 0.0
            || self.paddle_height <= 0.0
            || self.paddle_height > self.height
            || self.paddle_margin + self.paddle_width > self.width / 2.0
        {
            return Err(ConfigError::PaddleTooLarge {
                paddle_width: self.paddle_width,
                paddle_height: self.paddle_height,
                width: self.width,
                height: self.height,
            });
        }
        if self.ball_radius <= 0.0 {
            return Err(ConfigError::DegenerateBall(self.ball_radius));
        }
        if self.ball_radius * 2.0 > self.height {
            return Err(ConfigError::BallTooLarge {
                diameter: self.ball_radius * 2.0,
                height: self.height,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }

    /// Fixed x of the left paddle
    pub fn left_paddle_x(&self) -> f32 {
        self.paddle_margin
    }

    /// Fixed x of the right paddle
    pub fn right_paddle_x(&self) -> f32 {
        self.width - self.paddle_margin - self.paddle_width
    }

    /// Paddle y when vertically centered
    pub fn center_paddle_y(&self) -> f32 {
        self.height / 2.0 - self.paddle_height / 2.0
    }

    /// Largest legal paddle y
    pub fn max_paddle_y(&self) -> f32 {
        self.height - self.paddle_height
    }

    /// Ticks the scored pause lasts before the next serve or game over
    pub fn pause_ticks(&self) -> u32 {
        (self.pause_secs * self.tick_rate as f32).ceil() as u32
    }
}
