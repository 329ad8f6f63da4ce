//! Rectangle geometry used by the drawing operations

use crate::error::{GraphicsError, Result};

/// Integer rectangle in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check that the rectangle can be drawn.
    ///
    /// Width and height must be non-negative and the far edges must fit in `i32`.
    pub fn validate(&self) -> Result<()> {
        if self.width < 0 || self.height < 0 {
            return Err(GraphicsError::invalid(format!(
                "rectangle has negative size {}x{}",
                self.width, self.height
            )));
        }
        if self.x.checked_add(self.width).is_none() || self.y.checked_add(self.height).is_none() {
            return Err(GraphicsError::invalid(format!(
                "rectangle {:?} overflows the coordinate space",
                self
            )));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.right() && y < self.bottom()
    }

    /// Intersection with a `width` x `height` area anchored at the origin.
    ///
    /// Returns `None` when nothing is left to draw.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<Rect> {
        let x_start = self.x.max(0);
        let y_start = self.y.max(0);
        let x_end = (self.x as i64 + self.width as i64).min(width as i64) as i32;
        let y_end = (self.y as i64 + self.height as i64).min(height as i64) as i32;

        if x_end <= x_start || y_end <= y_start {
            return None;
        }
        Some(Rect::new(x_start, y_start, x_end - x_start, y_end - y_start))
    }
}
