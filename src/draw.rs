// filepath: src/draw.rs
//! Drawing surfaces
//!
//! This file defines the [`Surface`] trait the graphics context draws
//! through, and [`Canvas`], a software surface over a caller-owned
//! ARGB8888 byte buffer.

use crate::color::{self, Color, NativeColor};
use crate::error::{GraphicsError, Result};
use crate::rect::Rect;

/// Pixel target with a fixed size and a handful of primitives.
///
/// Callers are expected to hand in well-formed rectangles; geometry
/// validation happens in the graphics context before any primitive runs.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Paint the border of `rect`, `stroke_width` pixels thick, inside the rectangle
    fn draw_stroked_rect(
        &mut self,
        rect: Rect,
        color: NativeColor,
        stroke_width: f32,
        antialias: bool,
    );

    fn draw_filled_rect(&mut self, rect: Rect, color: NativeColor, antialias: bool);

    /// Copy already converted pixels, `pitch` pixels per row, with the
    /// top-left corner at (`x`, `y`). Destinations outside the surface are skipped.
    fn blit_converted_pixels(&mut self, pixels: &[NativeColor], pitch: u32, x: i32, y: i32);

    fn to_native(&self, color: Color) -> NativeColor {
        color::to_native(color)
    }

    fn from_native(&self, native: NativeColor) -> Color {
        color::from_native(native)
    }
}

/// Source-over blend of `src` scaled by `coverage` onto `dst`
fn blend(dst: NativeColor, src: NativeColor, coverage: f32) -> NativeColor {
    let sa = src.alpha() as f32 / 255.0 * coverage.clamp(0.0, 1.0);
    if sa >= 1.0 {
        return src;
    }
    if sa <= 0.0 {
        return dst;
    }

    let da = dst.alpha() as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let mix = |s: u8, d: u8| {
        ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    NativeColor::from_argb(
        (out_a * 255.0).round() as u8,
        mix(src.red(), dst.red()),
        mix(src.green(), dst.green()),
        mix(src.blue(), dst.blue()),
    )
}

/// Software surface over a raw ARGB8888 buffer
pub struct Canvas<'a> {
    buffer: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    /// Create a new canvas from a raw buffer of at least `width * height * 4` bytes
    pub fn new(buffer: &'a mut [u8], width: u32, height: u32) -> Result<Self> {
        let needed = (width as usize) * (height as usize) * 4;
        if buffer.len() < needed {
            return Err(GraphicsError::invalid(format!(
                "buffer of {} bytes is too small for a {}x{} canvas",
                buffer.len(),
                width,
                height
            )));
        }
        Ok(Self {
            buffer,
            width,
            height,
        })
    }

    /// Raw bytes backing the canvas
    pub fn buffer(&self) -> &[u8] {
        &self.buffer[..]
    }

    /// Read a pixel, `None` outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<NativeColor> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let idx = self.offset(x as u32, y as u32);
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.buffer[idx..idx + 4]);
        Some(NativeColor::from_bytes(bytes))
    }

    /// Overwrite every pixel
    pub fn clear(&mut self, color: NativeColor) {
        let bytes = color.to_bytes();
        let used = (self.width as usize) * (self.height as usize) * 4;
        for pixel in self.buffer[..used].chunks_exact_mut(4) {
            pixel.copy_from_slice(&bytes);
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: NativeColor) {
        let idx = self.offset(x, y);
        self.buffer[idx..idx + 4].copy_from_slice(&color.to_bytes());
    }

    fn blend_pixel(&mut self, x: u32, y: u32, color: NativeColor, coverage: f32) {
        let idx = self.offset(x, y);
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.buffer[idx..idx + 4]);
        let out = blend(NativeColor::from_bytes(bytes), color, coverage);
        self.buffer[idx..idx + 4].copy_from_slice(&out.to_bytes());
    }
}

impl Surface for Canvas<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_stroked_rect(
        &mut self,
        rect: Rect,
        color: NativeColor,
        stroke_width: f32,
        antialias: bool,
    ) {
        let Some(visible) = rect.clip_to(self.width, self.height) else {
            return;
        };

        // Rings at distance < full are solid, the ring at distance == full
        // gets the fractional coverage.
        let (full, partial) = if stroke_width <= 0.0 {
            (1, 0.0)
        } else if antialias {
            let floor = stroke_width.floor();
            (floor as i64, stroke_width - floor)
        } else {
            ((stroke_width.round() as i64).max(1), 0.0)
        };

        let left = rect.x as i64;
        let top = rect.y as i64;
        let right = rect.right() as i64 - 1;
        let bottom = rect.bottom() as i64 - 1;

        for y in visible.y..visible.bottom() {
            for x in visible.x..visible.right() {
                let (px, py) = (x as i64, y as i64);
                let ring = (px - left).min(py - top).min(right - px).min(bottom - py);
                if ring < full {
                    self.blend_pixel(x as u32, y as u32, color, 1.0);
                } else if ring == full && partial > 0.0 {
                    self.blend_pixel(x as u32, y as u32, color, partial);
                }
            }
        }
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: NativeColor, _antialias: bool) {
        // Integer rectangles cover whole pixels, so there are no partial edges.
        let Some(visible) = rect.clip_to(self.width, self.height) else {
            return;
        };

        for y in visible.y..visible.bottom() {
            for x in visible.x..visible.right() {
                self.blend_pixel(x as u32, y as u32, color, 1.0);
            }
        }
    }

    fn blit_converted_pixels(&mut self, pixels: &[NativeColor], pitch: u32, x: i32, y: i32) {
        if pitch == 0 {
            return;
        }
        let rows = pixels.len() / pitch as usize;
        let source = Rect::new(
            x,
            y,
            pitch.min(i32::MAX as u32) as i32,
            rows.min(i32::MAX as usize) as i32,
        );
        let Some(visible) = source.clip_to(self.width, self.height) else {
            return;
        };

        for dy in visible.y..visible.bottom() {
            let j = (dy as i64 - y as i64) as usize;
            for dx in visible.x..visible.right() {
                let i = (dx as i64 - x as i64) as usize;
                self.put_pixel(dx as u32, dy as u32, pixels[j * pitch as usize + i]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: NativeColor = NativeColor(0xFFFF_0000);
    const BLUE: NativeColor = NativeColor(0xFF00_00FF);

    #[test]
    fn test_new_rejects_short_buffer() {
        let mut buffer = vec![0u8; 15];
        assert!(Canvas::new(&mut buffer, 2, 2).is_err());
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let mut buffer = vec![0u8; 4 * 4 * 4];
        let canvas = Canvas::new(&mut buffer, 4, 4).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some(NativeColor::TRANSPARENT));
        assert_eq!(canvas.pixel(4, 0), None);
        assert_eq!(canvas.pixel(0, -1), None);
    }

    #[test]
    fn test_opaque_fill_replaces_pixels() {
        let mut buffer = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut buffer, 4, 4).unwrap();
        canvas.clear(BLUE);
        canvas.draw_filled_rect(Rect::new(1, 1, 2, 2), RED, false);

        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(2, 2), Some(RED));
        assert_eq!(canvas.pixel(0, 0), Some(BLUE));
        assert_eq!(canvas.pixel(3, 3), Some(BLUE));
    }

    #[test]
    fn test_buffer_uses_bgra_bytes() {
        let mut buffer = vec![0u8; 4];
        {
            let mut canvas = Canvas::new(&mut buffer, 1, 1).unwrap();
            canvas.draw_filled_rect(Rect::new(0, 0, 1, 1), NativeColor(0x8010_2030), false);
        }
        assert_eq!(buffer, vec![0x30, 0x20, 0x10, 0x80]);
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut buffer = vec![0u8; 4];
        let mut canvas = Canvas::new(&mut buffer, 1, 1).unwrap();
        canvas.clear(NativeColor(0xFF00_0000));
        let white = NativeColor::from_argb(128, 255, 255, 255);
        canvas.draw_filled_rect(Rect::new(0, 0, 1, 1), white, false);

        let px = canvas.pixel(0, 0).unwrap();
        assert_eq!(px.alpha(), 255);
        assert_eq!(px.red(), 128);
        assert_eq!(px.red(), px.blue());
    }

    #[test]
    fn test_stroke_leaves_interior_untouched() {
        let mut buffer = vec![0u8; 5 * 5 * 4];
        let mut canvas = Canvas::new(&mut buffer, 5, 5).unwrap();
        canvas.draw_stroked_rect(Rect::new(0, 0, 5, 5), RED, 1.0, false);

        for i in 0..5 {
            assert_eq!(canvas.pixel(i, 0), Some(RED));
            assert_eq!(canvas.pixel(i, 4), Some(RED));
            assert_eq!(canvas.pixel(0, i), Some(RED));
            assert_eq!(canvas.pixel(4, i), Some(RED));
        }
        assert_eq!(canvas.pixel(2, 2), Some(NativeColor::TRANSPARENT));
        assert_eq!(canvas.pixel(1, 1), Some(NativeColor::TRANSPARENT));
    }

    #[test]
    fn test_zero_width_stroke_is_hairline() {
        let mut buffer = vec![0u8; 3 * 3 * 4];
        let mut canvas = Canvas::new(&mut buffer, 3, 3).unwrap();
        canvas.draw_stroked_rect(Rect::new(0, 0, 3, 3), RED, 0.0, true);

        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(1, 1), Some(NativeColor::TRANSPARENT));
    }

    #[test]
    fn test_antialiased_fractional_stroke() {
        let mut buffer = vec![0u8; 6 * 6 * 4];
        let mut canvas = Canvas::new(&mut buffer, 6, 6).unwrap();
        canvas.draw_stroked_rect(Rect::new(0, 0, 6, 6), RED, 1.5, true);

        assert_eq!(canvas.pixel(0, 3), Some(RED));
        let inner = canvas.pixel(1, 3).unwrap();
        assert_eq!(inner.alpha(), 128);
        assert_eq!(inner.red(), 255);
        assert_eq!(canvas.pixel(2, 3), Some(NativeColor::TRANSPARENT));
    }

    #[test]
    fn test_aliased_fractional_stroke_rounds() {
        let mut buffer = vec![0u8; 6 * 6 * 4];
        let mut canvas = Canvas::new(&mut buffer, 6, 6).unwrap();
        canvas.draw_stroked_rect(Rect::new(0, 0, 6, 6), RED, 1.5, false);

        assert_eq!(canvas.pixel(1, 3), Some(RED));
        assert_eq!(canvas.pixel(2, 3), Some(NativeColor::TRANSPARENT));
    }

    #[test]
    fn test_blit_clips() {
        let mut buffer = vec![0u8; 3 * 3 * 4];
        let mut canvas = Canvas::new(&mut buffer, 3, 3).unwrap();
        let pixels = [RED, BLUE, BLUE, RED];
        canvas.blit_converted_pixels(&pixels, 2, 2, -1);

        assert_eq!(canvas.pixel(2, 0), Some(BLUE));
        assert_eq!(canvas.pixel(1, 0), Some(NativeColor::TRANSPARENT));
        assert_eq!(canvas.pixel(2, 1), Some(NativeColor::TRANSPARENT));
    }

    #[test]
    fn test_blit_replaces_without_blending() {
        let mut buffer = vec![0u8; 4];
        let mut canvas = Canvas::new(&mut buffer, 1, 1).unwrap();
        canvas.clear(RED);
        canvas.blit_converted_pixels(&[NativeColor::TRANSPARENT], 1, 0, 0);
        assert_eq!(canvas.pixel(0, 0), Some(NativeColor::TRANSPARENT));
    }
}
