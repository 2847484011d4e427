//! Software rendering of the match into an RGBA8 framebuffer
//!
//! The renderer is a pure function of [`GameState`]: it reads, never mutates.
//! All coordinates are playfield pixels; the frontend hands us a buffer of
//! exactly the playfield resolution and scales it to the window.

pub mod glyphs;
pub mod raster;

use crate::sim::{GameState, Mode, Side};
use raster::{BLACK, RED, Raster, WHITE};

/// Border thickness of the court frame and the center divider
const FRAME_THICKNESS: i32 = 10;
/// Integer scale of the two score counters
const SCORE_SCALE: i32 = 9;
/// Integer scale of the victory banner
const BANNER_SCALE: i32 = 3;
/// Gap between each score counter and the center divider
const SCORE_GAP: i32 = 50;
const SCORE_Y: i32 = 20;

/// Render one frame of the match
pub fn draw_frame(frame: &mut [u8], state: &GameState) {
    let config = &state.config;
    let mut raster = Raster::new(frame, config.width as u32, config.height as u32);

    raster.clear(BLACK);

    if state.mode == Mode::GameOver {
        draw_victory_banner(&mut raster, state);
        return;
    }

    draw_court(&mut raster);
    draw_scores(&mut raster, state);

    for side in [Side::Left, Side::Right] {
        let rect = state.paddle(side).rect(config);
        raster.fill_rect(
            rect.x as i32,
            rect.y as i32,
            rect.w as i32,
            rect.h as i32,
            WHITE,
        );
    }

    // The ball turns red while the speed cap is decaying it back down
    let color = if state.ball.over_speed_cap(config.max_speed) {
        RED
    } else {
        WHITE
    };
    raster.fill_circle(
        state.ball.pos.x as i32,
        state.ball.pos.y as i32,
        state.ball.radius as i32,
        color,
    );
}

/// Court frame plus center divider
fn draw_court(raster: &mut Raster<'_>) {
    let (w, h) = (raster.width(), raster.height());
    raster.stroke_rect(0, 0, w, h, FRAME_THICKNESS, WHITE);
    raster.vertical_line(w / 2, FRAME_THICKNESS, WHITE);
}

/// Score counters either side of the divider: left right-aligned, right
/// left-aligned
fn draw_scores(raster: &mut Raster<'_>, state: &GameState) {
    let mid = raster.width() / 2;

    let left = state.score[Side::Left.index()].to_string();
    let left_x = mid - SCORE_GAP - glyphs::text_width(&left, SCORE_SCALE);
    glyphs::draw_text(raster, &left, left_x, SCORE_Y, SCORE_SCALE, WHITE);

    let right = state.score[Side::Right.index()].to_string();
    glyphs::draw_text(raster, &right, mid + SCORE_GAP, SCORE_Y, SCORE_SCALE, WHITE);
}

/// Centered banner on an otherwise black screen
fn draw_victory_banner(raster: &mut Raster<'_>, state: &GameState) {
    let text = state.victory_message();
    let x = (raster.width() - glyphs::text_width(&text, BANNER_SCALE)) / 2;
    let y = (raster.height() - glyphs::GLYPH_HEIGHT * BANNER_SCALE) / 2;
    glyphs::draw_text(raster, &text, x, y, BANNER_SCALE, WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn frame_for(state: &GameState) -> Vec<u8> {
        let config = &state.config;
        let mut frame = vec![0u8; (config.width * config.height * 4.0) as usize];
        draw_frame(&mut frame, state);
        frame
    }

    fn pixel(frame: &[u8], width: i32, x: i32, y: i32) -> [u8; 4] {
        let idx = ((y * width + x) * 4) as usize;
        [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
    }

    #[test]
    fn playing_frame_draws_court_paddles_and_ball() {
        let state = GameState::new(Config::default(), 3);
        let frame = frame_for(&state);
        let w = state.config.width as i32;

        // Border corner and center divider
        assert_eq!(pixel(&frame, w, 0, 0), WHITE);
        assert_eq!(pixel(&frame, w, w / 2, 300), WHITE);
        // Left paddle interior (x = 50..80, vertically centered)
        assert_eq!(pixel(&frame, w, 60, 360), WHITE);
        // Ball center (serve position)
        assert_eq!(pixel(&frame, w, 640, 360), WHITE);
    }

    #[test]
    fn over_cap_ball_renders_red() {
        let mut state = GameState::new(Config::default(), 3);
        state.ball.vel.x = 20.0;
        let frame = frame_for(&state);
        let w = state.config.width as i32;

        assert_eq!(pixel(&frame, w, 640, 360), RED);
    }

    #[test]
    fn game_over_frame_is_banner_only() {
        let mut state = GameState::new(Config::default(), 3);
        state.score = [5, 1];
        state.mode = Mode::GameOver;
        let frame = frame_for(&state);
        let w = state.config.width as i32;

        // No court border, no paddles
        assert_eq!(pixel(&frame, w, 0, 0), BLACK);
        assert_eq!(pixel(&frame, w, 60, 360), BLACK);
        // Banner row has at least one lit pixel
        let y = (state.config.height as i32 - glyphs::GLYPH_HEIGHT * BANNER_SCALE) / 2;
        let lit = (0..w).any(|x| pixel(&frame, w, x, y + BANNER_SCALE) == WHITE);
        assert!(lit);
    }
}
