//! Image to surface conversion

use log::trace;

use crate::color::{Color, NativeColor};
use crate::draw::Surface;
use crate::image::{Image, ImageData};
use crate::palette::Palette;

/// Convert every pixel of `image` to the surface format.
///
/// Indexed pixels are looked up in `palette`; the result is row-major with
/// `image.width()` pixels per row.
pub fn convert_image_pixels<S: Surface + ?Sized>(
    image: &Image,
    palette: &Palette,
    surface: &S,
) -> Vec<NativeColor> {
    match image.data() {
        ImageData::Indexed(indices) => {
            // Resolve each palette entry once instead of once per pixel.
            let lookup: Vec<NativeColor> = (0..=u8::MAX as usize)
                .map(|index| surface.to_native(palette.get(index)))
                .collect();
            indices.iter().map(|&index| lookup[index as usize]).collect()
        }
        ImageData::Rgba(pixels) => pixels
            .iter()
            .map(|&rgba| surface.to_native(rgba.into()))
            .collect(),
        ImageData::Gray(pixels) => pixels
            .iter()
            .map(|&[v, a]| surface.to_native(Color::Gray { v, a }))
            .collect(),
    }
}

/// Blit `image` onto `surface` with its top-left corner at (`x`, `y`)
pub fn convert_image_to_surface<S: Surface + ?Sized>(
    image: &Image,
    palette: &Palette,
    surface: &mut S,
    x: i32,
    y: i32,
) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }
    trace!(
        "converting {}x{} image to surface at ({}, {})",
        image.width(),
        image.height(),
        x,
        y
    );
    let pixels = convert_image_pixels(image, palette, surface);
    surface.blit_converted_pixels(&pixels, image.width(), x, y);
}
