//! Pixel-level drawing primitives for an RGBA8 framebuffer
//!
//! Everything clips against the buffer bounds, so callers can draw shapes
//! that hang partially off screen (the ball does, mid-score).

/// RGBA color
pub type Color = [u8; 4];

pub const BLACK: Color = [0, 0, 0, 255];
pub const WHITE: Color = [255, 255, 255, 255];
/// Debug tint for a speed-capped ball
pub const RED: Color = [209, 41, 41, 255];

/// A borrowed RGBA8 framebuffer with its pixel dimensions
pub struct Raster<'a> {
    frame: &'a mut [u8],
    width: i32,
    height: i32,
}

impl<'a> Raster<'a> {
    /// Wrap a framebuffer slice; the slice must hold `width * height` RGBA
    /// pixels.
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), (width * height * 4) as usize);
        Self {
            frame,
            width: width as i32,
            height: height as i32,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Fill the whole buffer with one color
    pub fn clear(&mut self, color: Color) {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Set a single pixel; out-of-bounds coordinates are dropped
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        self.frame[idx..idx + 4].copy_from_slice(&color);
    }

    /// Filled axis-aligned rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                let idx = ((py * self.width + px) * 4) as usize;
                self.frame[idx..idx + 4].copy_from_slice(&color);
            }
        }
    }

    /// Rectangle outline of the given border thickness, drawn inward
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, thickness: i32, color: Color) {
        self.fill_rect(x, y, w, thickness, color);
        self.fill_rect(x, y + h - thickness, w, thickness, color);
        self.fill_rect(x, y, thickness, h, color);
        self.fill_rect(x + w - thickness, y, thickness, h, color);
    }

    /// Full-height vertical line centered on `x`
    pub fn vertical_line(&mut self, x: i32, thickness: i32, color: Color) {
        self.fill_rect(x - thickness / 2, 0, thickness, self.height, color);
    }

    /// Filled circle
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: Color) {
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }
}
