//! Immediate-mode graphics context
//!
//! A [`GraphicsContext`] owns a [`Surface`] and a stack of [`DrawState`]
//! snapshots. Draw calls read the state at the top of the stack;
//! `save`/`restore` scope changes to that state.

use log::{debug, trace};

use crate::color::{Color, NativeColor};
use crate::convert::convert_image_to_surface;
use crate::draw::Surface;
use crate::error::{GraphicsError, Result};
use crate::image::Image;
use crate::palette::PaletteResolver;
use crate::rect::Rect;

/// Drawing parameters active for a draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub antialias: bool,
    pub color: NativeColor,
    pub stroke_width: f32,
}

impl DrawState {
    pub const DEFAULT_COLOR: NativeColor = NativeColor::from_argb(255, 0, 0, 0);
    pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;
}

impl Default for DrawState {
    /// Aliased, opaque black, one pixel wide
    fn default() -> Self {
        Self {
            antialias: false,
            color: Self::DEFAULT_COLOR,
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
        }
    }
}

fn validate_stroke_width(stroke_width: f32) -> Result<()> {
    if !stroke_width.is_finite() || stroke_width < 0.0 {
        return Err(GraphicsError::invalid(format!(
            "stroke width must be a finite value >= 0, got {stroke_width}"
        )));
    }
    Ok(())
}

/// Drawing context bound to a surface it owns for its whole lifetime
pub struct GraphicsContext<S: Surface> {
    surface: S,
    // Never empty: the bottom entry is the construction default.
    states: Vec<DrawState>,
}

impl<S: Surface> GraphicsContext<S> {
    /// Bind to `surface` with the default drawing state
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            states: vec![DrawState::default()],
        }
    }

    /// Bind to `surface` with a caller supplied bottom-of-stack state
    pub fn with_state(surface: S, state: DrawState) -> Result<Self> {
        validate_stroke_width(state.stroke_width)?;
        Ok(Self {
            surface,
            states: vec![state],
        })
    }

    fn top(&self) -> &DrawState {
        // The stack is never empty; see `restore`.
        &self.states[self.states.len() - 1]
    }

    fn top_mut(&mut self) -> &mut DrawState {
        let last = self.states.len() - 1;
        &mut self.states[last]
    }

    /// Push a copy of the current state
    pub fn save(&mut self) {
        let current = *self.top();
        self.states.push(current);
        trace!("save: depth {}", self.states.len());
    }

    /// Pop the current state. At the bottom of the stack this does nothing.
    pub fn restore(&mut self) {
        if self.states.len() > 1 {
            self.states.pop();
            trace!("restore: depth {}", self.states.len());
        } else {
            trace!("restore at the bottom of the state stack ignored");
        }
    }

    /// Number of states on the stack, always at least one
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// Copy of the active state
    pub fn state(&self) -> DrawState {
        *self.top()
    }

    /// Draw the border of `rect` with the current color, stroke width and antialias flag
    pub fn stroke_rect(&mut self, rect: Rect) -> Result<()> {
        rect.validate()?;
        let state = *self.top();
        debug!(
            "stroke_rect {:?} color={:#010x} width={} aa={}",
            rect, state.color.0, state.stroke_width, state.antialias
        );
        self.surface
            .draw_stroked_rect(rect, state.color, state.stroke_width, state.antialias);
        Ok(())
    }

    /// Fill `rect` with the current color
    pub fn fill_rect(&mut self, rect: Rect) -> Result<()> {
        rect.validate()?;
        let state = *self.top();
        debug!("fill_rect {:?} color={:#010x}", rect, state.color.0);
        self.surface.draw_filled_rect(rect, state.color, state.antialias);
        Ok(())
    }

    /// Copy `image` onto the surface with its top-left corner at (`x`, `y`).
    ///
    /// Indexed pixels are resolved through the palette supplied by `palette`.
    /// A missing image is silently ignored, as are destination pixels that
    /// fall outside the surface.
    pub fn draw_image<P: PaletteResolver + ?Sized>(
        &mut self,
        image: Option<&Image>,
        x: i32,
        y: i32,
        palette: &P,
    ) {
        let Some(image) = image else {
            trace!("draw_image without an image ignored");
            return;
        };
        debug!(
            "draw_image {}x{} at ({}, {})",
            image.width(),
            image.height(),
            x,
            y
        );
        convert_image_to_surface(image, palette.current_palette(), &mut self.surface, x, y);
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn antialias(&self) -> bool {
        self.top().antialias
    }

    pub fn set_antialias(&mut self, antialias: bool) {
        self.top_mut().antialias = antialias;
    }

    /// Current color as RGBA
    pub fn color(&self) -> Color {
        self.surface.from_native(self.top().color)
    }

    pub fn set_color(&mut self, color: Color) {
        let native = self.surface.to_native(color);
        self.top_mut().color = native;
    }

    pub fn stroke_width(&self) -> f32 {
        self.top().stroke_width
    }

    /// Fails on negative or non-finite widths, leaving the state unchanged
    pub fn set_stroke_width(&mut self, stroke_width: f32) -> Result<()> {
        validate_stroke_width(stroke_width)?;
        self.top_mut().stroke_width = stroke_width;
        Ok(())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Release the context and hand the surface back
    pub fn into_surface(self) -> S {
        self.surface
    }
}
