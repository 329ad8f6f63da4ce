pub mod color;
pub mod config;
pub mod context;
pub mod convert;
pub mod draw;
pub mod error;
pub mod image;
pub mod palette;
pub mod rect;

// Re-export the types most callers need
pub use crate::color::{Color, NativeColor};
pub use crate::context::{DrawState, GraphicsContext};
pub use crate::draw::{Canvas, Surface};
pub use crate::error::GraphicsError;
pub use crate::image::Image;
pub use crate::palette::{Palette, PaletteResolver};
pub use crate::rect::Rect;
