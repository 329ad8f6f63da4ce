//! Palettes for indexed images

use crate::color::Color;

/// Ordered table of colors addressed by index
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    entries: Vec<Color>,
}

impl Palette {
    pub fn new(entries: Vec<Color>) -> Self {
        Self { entries }
    }

    /// Palette with `size` transparent entries
    pub fn with_size(size: usize) -> Self {
        Self {
            entries: vec![Color::TRANSPARENT; size],
        }
    }

    /// Look up an entry. Indices past the end resolve to transparent black.
    pub fn get(&self, index: usize) -> Color {
        self.entries.get(index).copied().unwrap_or(Color::TRANSPARENT)
    }

    /// Replace an entry, growing the palette with transparent entries if needed
    pub fn set_entry(&mut self, index: usize, color: Color) {
        if index >= self.entries.len() {
            self.entries.resize(index + 1, Color::TRANSPARENT);
        }
        self.entries[index] = color;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Color] {
        &self.entries
    }
}

/// Source of the palette that indexed images are resolved through.
///
/// Hosts that keep an "active palette" implement this and hand it to
/// [`GraphicsContext::draw_image`](crate::GraphicsContext::draw_image)
/// instead of exposing process-wide state.
pub trait PaletteResolver {
    fn current_palette(&self) -> &Palette;
}

impl PaletteResolver for Palette {
    fn current_palette(&self) -> &Palette {
        self
    }
}

impl<T: PaletteResolver + ?Sized> PaletteResolver for &T {
    fn current_palette(&self) -> &Palette {
        (**self).current_palette()
    }
}
