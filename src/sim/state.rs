//! Match state and core simulation types
//!
//! Everything the tick mutates lives in one explicit [`GameState`]; no
//! module-level state anywhere.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::config::Config;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Active rally
    Playing,
    /// Short freeze after a point, before the next serve or game over
    ScoredPause,
    /// Match decided; terminal
    GameOver,
}

/// Player side, also the score index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Display name used in the victory banner
    pub fn player_name(self) -> &'static str {
        match self {
            Side::Left => "player 1",
            Side::Right => "player 2",
        }
    }
}

/// A player's paddle: x fixed, y mutable, vertical velocity only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub vel: f32,
}

impl Paddle {
    pub fn new(x: f32, config: &Config) -> Self {
        Self {
            x,
            y: config.center_paddle_y(),
            vel: 0.0,
        }
    }

    /// Bounding rectangle for collision and drawing
    pub fn rect(&self, config: &Config) -> Rect {
        Rect::new(self.x, self.y, config.paddle_width, config.paddle_height)
    }

    /// Back to the vertical center, stationary (called on serve)
    pub fn recenter(&mut self, config: &Config) {
        self.y = config.center_paddle_y();
        self.vel = 0.0;
    }
}

/// The ball; radius never changes after construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Bounding box used for paddle contact
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    /// True when either velocity component exceeds the cap. The renderer
    /// swaps the ball color on this; the physics applies the decay.
    pub fn over_speed_cap(&self, max_speed: f32) -> bool {
        self.vel.x.abs() > max_speed || self.vel.y.abs() > max_speed
    }
}

/// Complete match state, advanced only by [`tick`](super::tick::tick)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: Config,
    /// Match seed for reproducibility
    pub seed: u64,
    pub mode: Mode,
    /// Points per side, indexed by [`Side::index`]
    pub score: [u32; 2],
    /// Left and right paddles, in [`Side::index`] order
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    /// Ticks spent in the current scored pause
    pub pause_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Direction of the next serve; alternates every point
    serve_right: bool,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh match at 0 - 0, with the opening serve already in flight
    pub fn new(config: Config, seed: u64) -> Self {
        let mut state = Self {
            config,
            seed,
            mode: Mode::Playing,
            score: [0, 0],
            paddles: [
                Paddle::new(config.left_paddle_x(), &config),
                Paddle::new(config.right_paddle_x(), &config),
            ],
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                radius: config.ball_radius,
            },
            pause_ticks: 0,
            time_ticks: 0,
            serve_right: true,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.serve();
        state
    }

    /// Reset the ball to center moving in the alternating serve direction,
    /// and re-center both paddles.
    pub fn serve(&mut self) {
        let speed = if self.serve_right {
            self.config.serve_speed
        } else {
            -self.config.serve_speed
        };
        self.ball.pos = Vec2::new(self.config.width / 2.0, self.config.height / 2.0);
        self.ball.vel = Vec2::new(speed, 0.0);
        self.serve_right = !self.serve_right;
        for paddle in &mut self.paddles {
            paddle.recenter(&self.config);
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    /// Side that has reached the win score, if any
    pub fn winner(&self) -> Option<Side> {
        if self.score[Side::Left.index()] >= self.config.win_score {
            Some(Side::Left)
        } else if self.score[Side::Right.index()] >= self.config.win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Banner text for the game-over screen
    pub fn victory_message(&self) -> String {
        let leader = if self.score[0] > self.score[1] {
            Side::Left
        } else {
            Side::Right
        };
        let margin = self.score[0].abs_diff(self.score[1]);
        format!(
            "Congrats {}! You won the game by {} points.",
            leader.player_name(),
            margin
        )
    }
}
