//! Fixed timestep simulation tick
//!
//! Advances the match deterministically: scoring check, paddle kinematics,
//! ball kinematics, pause/game-over bookkeeping. Everything here is a pure
//! function of the prior state and the tick's input snapshot.

use rand::Rng;

use super::state::{GameState, Mode, Side};
use crate::consts::{BALL_SPEED_DECAY, PADDLE_EJECT_OFFSET, PADDLE_FRICTION};

/// Input for a single tick: held state of the four paddle buttons
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
}

/// Advance the match by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.mode == Mode::GameOver {
        // Terminal: the frontend keeps redrawing, nothing updates
        return;
    }
    state.time_ticks += 1;

    match state.mode {
        Mode::Playing => {
            if let Some(scorer) = ball_exit(state) {
                state.score[scorer.index()] += 1;
                state.mode = Mode::ScoredPause;
                state.pause_ticks = 0;
                state.serve();
                return;
            }
            tick_paddles(state, input);
            tick_ball(state);
        }
        Mode::ScoredPause => {
            state.pause_ticks += 1;
            if state.pause_ticks >= state.config.pause_ticks() {
                state.mode = match state.winner() {
                    Some(_) => Mode::GameOver,
                    None => Mode::Playing,
                };
            }
        }
        Mode::GameOver => {}
    }
}

/// Which side scored, if the ball fully left the playfield
fn ball_exit(state: &GameState) -> Option<Side> {
    let ball = &state.ball;
    if ball.pos.x + ball.radius < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x - ball.radius > state.config.width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Apply held input, friction, and integration to both paddles
fn tick_paddles(state: &mut GameState, input: &TickInput) {
    let config = state.config;
    let buttons = [(input.p1_up, input.p1_down), (input.p2_up, input.p2_down)];

    for (paddle, (up, down)) in state.paddles.iter_mut().zip(buttons) {
        // Up wins a simultaneous press
        if up {
            paddle.vel -= config.paddle_accel;
        } else if down {
            paddle.vel += config.paddle_accel;
        }

        paddle.vel *= PADDLE_FRICTION;
        paddle.y += paddle.vel;

        if paddle.y < 0.0 || paddle.y + config.paddle_height > config.height {
            // Stop dead at the wall: revert the move and drop all momentum
            paddle.y -= paddle.vel;
            paddle.vel = 0.0;
        }
    }
}

/// Integrate the ball, resolve paddle and wall contacts, decay over-cap speed
fn tick_ball(state: &mut GameState) {
    let config = state.config;

    state.ball.pos += state.ball.vel;

    let bounds = state.ball.bounds();
    let hit_left = bounds.intersects(&state.paddles[Side::Left.index()].rect(&config));
    let hit_right = bounds.intersects(&state.paddles[Side::Right.index()].rect(&config));
    if hit_left || hit_right {
        // Undo the horizontal move plus a fixed offset away from the struck
        // paddle, so the ball cannot stick inside it
        let eject = if hit_left {
            PADDLE_EJECT_OFFSET
        } else {
            -PADDLE_EJECT_OFFSET
        };
        state.ball.pos.x += -state.ball.vel.x + eject;
        state.ball.vel.x = -state.ball.vel.x;
        // Each return ratchets the vertical velocity up by 1 or 2; the only
        // brake is the speed-cap decay below
        state.ball.vel.y += state.rng.random_range(1..=2) as f32;
    }

    // Top/bottom wall reflection; left/right stay open for scoring
    if state.ball.pos.y <= state.ball.radius {
        state.ball.pos.y = state.ball.radius + 1.0;
        state.ball.vel.y = -state.ball.vel.y;
    }
    if state.ball.pos.y >= config.height - state.ball.radius {
        state.ball.pos.y = config.height - state.ball.radius - 1.0;
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Soft per-axis cap: a decay rather than a clamp, so an over-fast ball
    // takes several ticks to come back under the limit
    if state.ball.vel.x.abs() > config.max_speed {
        state.ball.vel.x *= BALL_SPEED_DECAY;
    }
    if state.ball.vel.y.abs() > config.max_speed {
        state.ball.vel.y *= BALL_SPEED_DECAY;
    }
}
