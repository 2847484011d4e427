//! Minimal 5x7 bitmap face for the score counters and the victory banner
//!
//! Covers digits, uppercase letters, '!' and '.'; lowercase input is folded
//! to uppercase and anything else renders as a blank advance. Each glyph row
//! is five bits, most significant bit leftmost.

use super::raster::{Color, Raster};

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 7;

/// Horizontal advance per character at the given integer scale, including
/// one column of spacing
pub fn advance(scale: i32) -> i32 {
    (GLYPH_WIDTH + 1) * scale
}

/// Pixel width of a rendered string (no trailing spacing column)
pub fn text_width(text: &str, scale: i32) -> i32 {
    let len = text.chars().count() as i32;
    if len == 0 {
        0
    } else {
        len * advance(scale) - scale
    }
}

fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch.to_ascii_uppercase() {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100],
        _ => return None,
    };
    Some(rows)
}

/// Draw one character; unknown characters (including space) leave a blank
/// cell
pub fn draw_char(raster: &mut Raster<'_>, ch: char, x: i32, y: i32, scale: i32, color: Color) {
    let Some(rows) = glyph(ch) else {
        return;
    };
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                raster.fill_rect(
                    x + col * scale,
                    y + row as i32 * scale,
                    scale,
                    scale,
                    color,
                );
            }
        }
    }
}

/// Draw a string left-aligned at (x, y)
pub fn draw_text(raster: &mut Raster<'_>, text: &str, x: i32, y: i32, scale: i32, color: Color) {
    let mut cx = x;
    for ch in text.chars() {
        draw_char(raster, ch, cx, y, scale, color);
        cx += advance(scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::raster::WHITE;

    #[test]
    fn every_needed_character_has_a_glyph() {
        for ch in "0123456789!.".chars() {
            assert!(glyph(ch).is_some(), "missing glyph for {ch:?}");
        }
        for ch in 'A'..='Z' {
            assert!(glyph(ch).is_some(), "missing glyph for {ch:?}");
        }
    }

    #[test]
    fn lowercase_folds_to_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('z'), glyph('Z'));
    }

    #[test]
    fn space_is_a_blank_advance() {
        assert_eq!(glyph(' '), None);
        let mut frame = vec![0u8; 8 * 8 * 4];
        let mut raster = Raster::new(&mut frame, 8, 8);
        draw_char(&mut raster, ' ', 0, 0, 1, WHITE);
        assert!(frame.iter().all(|&b| b == 0));
    }

    #[test]
    fn text_width_accounts_for_spacing() {
        assert_eq!(text_width("", 2), 0);
        assert_eq!(text_width("1", 2), 10);
        // Two glyphs, one spacing column between them
        assert_eq!(text_width("12", 2), 22);
    }

    #[test]
    fn drawn_digit_touches_its_cell() {
        let mut frame = vec![0u8; 8 * 8 * 4];
        let mut raster = Raster::new(&mut frame, 8, 8);
        draw_char(&mut raster, '8', 0, 0, 1, WHITE);
        // Top-middle of the figure eight
        let idx = ((0 * 8 + 2) * 4) as usize;
        assert_eq!(frame[idx], 255);
    }
}
