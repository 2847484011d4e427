//! Duel Pong - a minimal two-player Pong
//!
//! Core modules:
//! - `sim`: deterministic simulation (kinematics, scoring, match state machine)
//! - `renderer`: software raster rendering into an RGBA framebuffer
//! - `input`: held-key tracking for the four paddle buttons
//! - `config`: startup constants with fail-fast validation

pub mod config;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{Config, ConfigError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate (one tick per rendered frame)
    pub const TICK_RATE: u32 = 60;
    /// Seconds per simulation tick
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions, also the framebuffer resolution
    pub const PLAYFIELD_WIDTH: f32 = 1280.0;
    pub const PLAYFIELD_HEIGHT: f32 = 720.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 30.0;
    pub const PADDLE_HEIGHT: f32 = 180.0;
    /// Gap between each paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 50.0;
    /// Velocity change per tick while a button is held
    pub const PADDLE_ACCEL: f32 = 1.0;
    /// Per-tick velocity decay, applied whether or not a button is held
    pub const PADDLE_FRICTION: f32 = 0.9;

    /// Ball defaults (velocities are per tick, not per second)
    pub const BALL_RADIUS: f32 = 15.0;
    /// Horizontal speed the ball is served with
    pub const BALL_SERVE_SPEED: f32 = 8.0;
    /// Per-axis speed cap; excess decays by `BALL_SPEED_DECAY` each tick
    pub const BALL_MAX_SPEED: f32 = 10.0;
    pub const BALL_SPEED_DECAY: f32 = 0.9;
    /// Horizontal unstick offset applied on paddle contact
    pub const PADDLE_EJECT_OFFSET: f32 = 10.0;

    /// First side to reach this score wins the match
    pub const WIN_SCORE: u32 = 5;
    /// Pause between a point and the next serve, in seconds
    pub const SCORED_PAUSE_SECS: f32 = 1.5;
}
