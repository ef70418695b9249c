use image::RgbaImage;

use crate::assets::Assets;
use crate::error::Result;
use crate::orbit::{snapshot, OrbitSnapshot};
use crate::sprite::{data_uri, lit_moon};
use crate::state::SimulationState;
use crate::{config::SceneConfig, layout::SceneLayout};

/// Sprites composed for one render, already encoded for embedding.
pub struct Sprites {
    pub lit_moon: RgbaImage,
    pub moon_href: String,
    pub earth_href: String,
}

impl Sprites {
    pub fn compose(assets: &Assets, snap: &OrbitSnapshot) -> Result<Self> {
        let lit_moon = lit_moon(&assets.moon, snap.lit_fraction);
        let moon_href = data_uri(&lit_moon)?;
        let earth_href = data_uri(&assets.earth)?;
        Ok(Self {
            lit_moon,
            moon_href,
            earth_href,
        })
    }
}

pub struct SceneContext {
    pub state: SimulationState,
    pub snapshot: OrbitSnapshot,
    pub sprites: Sprites,
    pub cfg: SceneConfig,
    pub layout: SceneLayout,
}

impl SceneContext {
    pub fn new(assets: &Assets, state: SimulationState, cfg: SceneConfig) -> Result<Self> {
        let layout = SceneLayout::from(&cfg);
        let snapshot = snapshot(&state);
        let sprites = Sprites::compose(assets, &snapshot)?;
        Ok(Self {
            state,
            snapshot,
            sprites,
            cfg,
            layout,
        })
    }
}
