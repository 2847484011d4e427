//! End-to-end match scenarios driven through the public simulation API

use glam::Vec2;

use duel_pong::Config;
use duel_pong::sim::{GameState, Mode, Side, TickInput, tick};

const IDLE: TickInput = TickInput {
    p1_up: false,
    p1_down: false,
    p2_up: false,
    p2_down: false,
};

fn force_exit_left(state: &mut GameState) {
    state.ball.pos = Vec2::new(-50.0, state.config.height / 2.0);
    state.ball.vel = Vec2::ZERO;
}

fn force_exit_right(state: &mut GameState) {
    state.ball.pos = Vec2::new(state.config.width + 50.0, state.config.height / 2.0);
    state.ball.vel = Vec2::ZERO;
}

#[test]
fn a_point_pauses_then_resumes_play() {
    let mut state = GameState::new(Config::default(), 11);
    state.score = [4, 0];

    force_exit_left(&mut state);
    tick(&mut state, &IDLE);

    assert_eq!(state.score, [4, 1]);
    assert_eq!(state.mode, Mode::ScoredPause);
    // Ball is already reset and parked at center for the pause
    assert_eq!(
        state.ball.pos,
        Vec2::new(state.config.width / 2.0, state.config.height / 2.0)
    );

    let frozen = state.ball.pos;
    for _ in 0..state.config.pause_ticks() - 1 {
        tick(&mut state, &IDLE);
        assert_eq!(state.mode, Mode::ScoredPause);
        assert_eq!(state.ball.pos, frozen);
    }
    tick(&mut state, &IDLE);
    assert_eq!(state.mode, Mode::Playing);
}

#[test]
fn match_ends_permanently_at_the_win_score() {
    let mut state = GameState::new(Config::default(), 11);
    state.score = [4, 2];

    force_exit_right(&mut state);
    tick(&mut state, &IDLE);
    assert_eq!(state.score, [5, 2]);
    assert_eq!(state.winner(), Some(Side::Left));

    // Pause still runs in full before the match is declared over
    assert_eq!(state.mode, Mode::ScoredPause);
    for _ in 0..state.config.pause_ticks() {
        tick(&mut state, &IDLE);
    }
    assert_eq!(state.mode, Mode::GameOver);

    let message = state.victory_message();
    assert!(message.contains("player 1"));
    assert!(message.contains("3 points"));

    // Nothing moves the match out of game over
    let held = TickInput {
        p1_down: true,
        p2_up: true,
        ..IDLE
    };
    for _ in 0..300 {
        tick(&mut state, &held);
    }
    assert_eq!(state.mode, Mode::GameOver);
    assert_eq!(state.score, [5, 2]);
}

#[test]
fn serves_alternate_across_points() {
    let mut state = GameState::new(Config::default(), 11);
    // Opening serve goes right
    assert!(state.ball.vel.x > 0.0);

    force_exit_left(&mut state);
    tick(&mut state, &IDLE);
    // Second serve goes left
    assert!(state.ball.vel.x < 0.0);

    for _ in 0..state.config.pause_ticks() {
        tick(&mut state, &IDLE);
    }
    assert_eq!(state.mode, Mode::Playing);

    force_exit_right(&mut state);
    tick(&mut state, &IDLE);
    // Third serve goes right again
    assert!(state.ball.vel.x > 0.0);
}

#[test]
fn long_rally_preserves_the_core_invariants() {
    let config = Config::default();
    let mut state = GameState::new(config, 99);
    let held = TickInput {
        p1_up: true,
        p2_down: true,
        ..IDLE
    };

    let mut last_score = state.score;
    for n in 0..20_000u32 {
        let input = if n % 3 == 0 { held } else { IDLE };
        tick(&mut state, &input);

        for paddle in &state.paddles {
            assert!(paddle.y >= 0.0);
            assert!(paddle.y + config.paddle_height <= config.height);
        }
        assert_eq!(state.ball.radius, config.ball_radius);
        assert!(state.score[0] >= last_score[0]);
        assert!(state.score[1] >= last_score[1]);
        assert!(state.score[0] <= config.win_score);
        assert!(state.score[1] <= config.win_score);
        last_score = state.score;

        if state.mode == Mode::GameOver {
            break;
        }
    }
}

#[test]
fn identical_seeds_replay_identically() {
    let inputs = [
        TickInput { p1_up: true, ..IDLE },
        TickInput { p2_down: true, ..IDLE },
        IDLE,
    ];

    let mut a = GameState::new(Config::default(), 4242);
    let mut b = GameState::new(Config::default(), 4242);
    for n in 0..5_000usize {
        let input = &inputs[n % inputs.len()];
        tick(&mut a, input);
        tick(&mut b, input);
    }

    assert_eq!(a.mode, b.mode);
    assert_eq!(a.score, b.score);
    assert_eq!(a.ball, b.ball);
    assert_eq!(a.paddles, b.paddles);
    assert_eq!(a.time_ticks, b.time_ticks);
}
