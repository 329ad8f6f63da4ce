//! Source images for `draw_image`
//!
//! Indexed images store palette indices and are resolved through a
//! [`Palette`] at draw time. RGBA and grayscale images carry their own colors.

use crate::color::Color;
use crate::error::{GraphicsError, Result};
use crate::palette::Palette;

/// Pixel storage, one entry per pixel in row-major order
#[derive(Debug, Clone, PartialEq)]
pub enum ImageData {
    Indexed(Vec<u8>),
    Rgba(Vec<[u8; 4]>),
    /// Value and alpha
    Gray(Vec<[u8; 2]>),
}

impl ImageData {
    fn len(&self) -> usize {
        match self {
            ImageData::Indexed(data) => data.len(),
            ImageData::Rgba(data) => data.len(),
            ImageData::Gray(data) => data.len(),
        }
    }
}

/// Fixed-size grid of pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    data: ImageData,
}

impl Image {
    /// Indexed image filled with index 0
    pub fn indexed(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: ImageData::Indexed(vec![0; (width as usize) * (height as usize)]),
        }
    }

    pub fn from_indices(width: u32, height: u32, indices: Vec<u8>) -> Result<Self> {
        Self::from_data(width, height, ImageData::Indexed(indices))
    }

    pub fn from_rgba(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Result<Self> {
        Self::from_data(width, height, ImageData::Rgba(pixels))
    }

    pub fn from_gray(width: u32, height: u32, pixels: Vec<[u8; 2]>) -> Result<Self> {
        Self::from_data(width, height, ImageData::Gray(pixels))
    }

    fn from_data(width: u32, height: u32, data: ImageData) -> Result<Self> {
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(GraphicsError::invalid(format!(
                "image of {}x{} needs {} pixels, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &ImageData {
        &self.data
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self.data, ImageData::Indexed(_))
    }

    fn offset(&self, i: u32, j: u32) -> Option<usize> {
        if i >= self.width || j >= self.height {
            return None;
        }
        Some(j as usize * self.width as usize + i as usize)
    }

    /// Palette index at column `i`, row `j`. `None` for non-indexed images
    /// and coordinates outside the image.
    pub fn pixel_index_at(&self, i: u32, j: u32) -> Option<u8> {
        let offset = self.offset(i, j)?;
        match &self.data {
            ImageData::Indexed(data) => Some(data[offset]),
            _ => None,
        }
    }

    /// Write a palette index. Fails on non-indexed images or out-of-range
    /// coordinates.
    pub fn put_index(&mut self, i: u32, j: u32, index: u8) -> Result<()> {
        let offset = self
            .offset(i, j)
            .ok_or_else(|| GraphicsError::invalid(format!("pixel ({i}, {j}) outside image")))?;
        match &mut self.data {
            ImageData::Indexed(data) => {
                data[offset] = index;
                Ok(())
            }
            _ => Err(GraphicsError::invalid("image is not indexed")),
        }
    }

    /// Resolved color at column `i`, row `j`.
    ///
    /// Coordinates outside the image resolve to transparent.
    pub fn color_at(&self, i: u32, j: u32, palette: &Palette) -> Color {
        let Some(offset) = self.offset(i, j) else {
            return Color::TRANSPARENT;
        };
        match &self.data {
            ImageData::Indexed(data) => palette.get(data[offset] as usize),
            ImageData::Rgba(data) => Color::from_rgba(data[offset]),
            ImageData::Gray(data) => {
                let [v, a] = data[offset];
                Color::Gray { v, a }
            }
        }
    }
}
