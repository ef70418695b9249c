use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::Result;

const SHADOW: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Column where the shadow starts for a sprite `width` pixels wide.
pub fn lit_width(lit_fraction: f64, width: u32) -> u32 {
    let w = (lit_fraction.clamp(0.0, 1.0) * width as f64).floor() as u32;
    w.min(width)
}

/// Copy of the Moon texture with everything right of the lit width painted
/// black. A straight vertical split, not a terminator curve.
pub fn lit_moon(texture: &RgbaImage, lit_fraction: f64) -> RgbaImage {
    let mut img = texture.clone();
    let start = lit_width(lit_fraction, img.width());
    for y in 0..img.height() {
        for x in start..img.width() {
            img.put_pixel(x, y, SHADOW);
        }
    }
    img
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut png_data = Vec::new();
    img.write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)?;
    Ok(png_data)
}

/// PNG data URI suitable for an SVG `<image href>`.
pub fn data_uri(img: &RgbaImage) -> Result<String> {
    let png = encode_png(img)?;
    Ok(format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(&png)
    ))
}
