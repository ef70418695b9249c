//! Earth and Moon textures, loaded once before anything is drawn.

use image::{Rgba, RgbaImage};
use log::info;

use crate::error::{Error, Result};

/// Side length of the procedural textures used when no file is given.
pub const DEFAULT_TEXTURE_PX: u32 = 128;

#[derive(Debug, Clone)]
pub struct Assets {
    pub earth: RgbaImage,
    pub moon: RgbaImage,
}

impl Assets {
    /// Load both textures. Any path that is given must decode, there is no
    /// fallback for a broken file.
    pub fn load(earth_path: Option<&str>, moon_path: Option<&str>) -> Result<Self> {
        let earth = match earth_path {
            Some(p) => load_texture("earth", p)?,
            None => {
                info!("no earth texture given, using procedural globe");
                procedural_earth(DEFAULT_TEXTURE_PX)
            }
        };
        let moon = match moon_path {
            Some(p) => load_texture("moon", p)?,
            None => {
                info!("no moon texture given, using procedural moon");
                procedural_moon(DEFAULT_TEXTURE_PX)
            }
        };
        Ok(Self { earth, moon })
    }
}

fn load_texture(kind: &'static str, path: &str) -> Result<RgbaImage> {
    let img = image::open(path)
        .map_err(|source| Error::AssetLoad {
            kind,
            path: path.to_string(),
            source,
        })?
        .to_rgba8();
    if img.width() == 0 || img.height() == 0 {
        return Err(Error::EmptyAsset { kind });
    }
    info!(
        "loaded {kind} texture {path} ({}x{})",
        img.width(),
        img.height()
    );
    Ok(img)
}

// Distance of pixel (x, y) from the image center, normalized so the inscribed
// circle has radius 1.
fn radial(x: u32, y: u32, size: u32) -> (f64, f64, f64) {
    let half = size as f64 / 2.0;
    let dx = (x as f64 + 0.5 - half) / half;
    let dy = (y as f64 + 0.5 - half) / half;
    (dx, dy, dx.hypot(dy))
}

fn procedural_earth(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let (dx, dy, r) = radial(x, y, size);
        if r > 1.0 {
            return Rgba([0, 0, 0, 0]);
        }
        // A few blobby continents on an ocean
        let land = (dx * 5.0).sin() * (dy * 4.0).cos() + (dx * 2.0 + dy * 3.0).sin() * 0.5;
        if dy.abs() > 0.85 {
            Rgba([235, 240, 245, 255])
        } else if land > 0.45 {
            Rgba([60, 140, 70, 255])
        } else {
            Rgba([30, 80, 170, 255])
        }
    })
}

fn procedural_moon(size: u32) -> RgbaImage {
    // Craters as (cx, cy, radius) in normalized units
    const CRATERS: [(f64, f64, f64); 5] = [
        (-0.35, -0.30, 0.22),
        (0.30, -0.10, 0.15),
        (0.05, 0.40, 0.25),
        (-0.45, 0.35, 0.10),
        (0.50, 0.45, 0.12),
    ];
    RgbaImage::from_fn(size, size, |x, y| {
        let (dx, dy, r) = radial(x, y, size);
        if r > 1.0 {
            return Rgba([0, 0, 0, 0]);
        }
        let in_crater = CRATERS
            .iter()
            .any(|&(cx, cy, cr)| (dx - cx).hypot(dy - cy) < cr);
        if in_crater {
            Rgba([150, 150, 150, 255])
        } else {
            Rgba([200, 200, 195, 255])
        }
    })
}
