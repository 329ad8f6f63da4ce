//! Application colors and the surface-native pixel format
//!
//! Scripts and callers speak in [`Color`] values (RGB, HSV or gray, each with
//! alpha). Surfaces store [`NativeColor`] pixels: packed ARGB8888, laid out in
//! memory as little-endian `B, G, R, A` bytes.

/// Application-level color value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8, a: u8 },
    /// Hue in degrees, saturation and value in `0.0..=1.0`
    Hsv { h: f32, s: f32, v: f32, a: u8 },
    Gray { v: u8, a: u8 },
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Rgb { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::rgba(r, g, b, 255)
    }

    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Color::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Resolve to 8-bit RGBA components
    pub fn to_rgba(&self) -> [u8; 4] {
        match *self {
            Color::Rgb { r, g, b, a } => [r, g, b, a],
            Color::Hsv { h, s, v, a } => {
                let [r, g, b] = hsv_to_rgb(h, s, v);
                [unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), a]
            }
            Color::Gray { v, a } => [v, v, v, a],
        }
    }

    pub fn alpha(&self) -> u8 {
        match *self {
            Color::Rgb { a, .. } | Color::Hsv { a, .. } | Color::Gray { a, .. } => a,
        }
    }

    /// Same color expressed as HSV
    pub fn to_hsv(&self) -> Color {
        let [r, g, b, a] = self.to_rgba();
        let [h, s, v] = rgb_to_hsv(r, g, b);
        Color::Hsv { h, s, v, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Color::from_rgba(rgba)
    }
}

/// Packed `0xAARRGGBB` pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NativeColor(pub u32);

impl NativeColor {
    pub const TRANSPARENT: NativeColor = NativeColor(0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        NativeColor(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Bytes as they sit in a surface buffer
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        NativeColor(u32::from_le_bytes(bytes))
    }
}

/// Convert an application color into the surface pixel format
pub fn to_native(color: Color) -> NativeColor {
    let [r, g, b, a] = color.to_rgba();
    NativeColor::from_argb(a, r, g, b)
}

/// Convert a surface pixel back into an RGBA application color
pub fn from_native(native: NativeColor) -> Color {
    Color::rgba(native.red(), native.green(), native.blue(), native.alpha())
}

fn unit_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// HSV (hue in degrees) to linear RGB components in `0.0..=1.0`
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    let c = v * s;
    let h_prime = (h * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// 8-bit RGB to HSV with hue in degrees
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [f32; 3] {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    [h, s, max]
}
