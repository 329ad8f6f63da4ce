// filepath: src/main.rs

use std::fs;
use std::io::Write;
use std::path::Path;

use gfx_context::config::GfxConfig;
use gfx_context::{Canvas, Color, GraphicsContext, Image, Palette, Rect};
use log::info;

/// Write an RGBA-over-white rendering of an ARGB8888 buffer as a binary PPM
fn write_ppm(
    path: &Path,
    buffer: &[u8],
    width: u32,
    height: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = Vec::with_capacity(buffer.len() / 4 * 3 + 32);
    write!(out, "P6\n{} {}\n255\n", width, height)?;
    for pixel in buffer.chunks_exact(4).take((width * height) as usize) {
        let (b, g, r, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
        let alpha = a as u32;
        for channel in [r, g, b] {
            out.push(((channel as u32 * alpha + 255 * (255 - alpha)) / 255) as u8);
        }
    }
    fs::write(path, out)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting gfx-context demo");

    let config = GfxConfig::load_from_file().unwrap_or_default();
    info!("Configuration loaded: {}x{}", config.width, config.height);

    let (width, height) = (config.width, config.height);
    let mut buffer = vec![0u8; (width as usize) * (height as usize) * 4];
    let canvas = Canvas::new(&mut buffer, width, height)?;
    let mut gc = GraphicsContext::with_state(canvas, config.draw_state())?;

    gc.save();
    gc.set_color(Color::WHITE);
    gc.fill_rect(Rect::new(0, 0, width as i32, height as i32))?;
    gc.restore();

    gc.save();
    gc.set_color(Color::RED);
    gc.set_stroke_width(2.0)?;
    gc.stroke_rect(Rect::new(2, 2, width as i32 / 2, height as i32 / 2))?;
    gc.restore();

    gc.fill_rect(Rect::new(width as i32 / 2, height as i32 / 2, 8, 8))?;

    let palette = Palette::new(vec![Color::TRANSPARENT, Color::BLUE, Color::GREEN]);
    let mut checker = Image::indexed(8, 8);
    for j in 0..8 {
        for i in 0..8 {
            checker.put_index(i, j, if (i + j) % 2 == 0 { 1 } else { 2 })?;
        }
    }
    gc.draw_image(Some(&checker), width as i32 - 10, 2, &palette);

    // Dropping the context releases the canvas and with it the borrow on `buffer`.
    drop(gc);

    write_ppm(&config.output, &buffer, width, height)?;
    info!("Wrote {}", config.output.display());
    Ok(())
}
