use std::sync::OnceLock;

use crate::assets::Assets;
use crate::config::SceneConfig;
use crate::context::SceneContext;
use crate::state::SimulationState;
use crate::types::TimeZone;

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn test_assets() -> &'static Assets {
    static ASSETS: OnceLock<Assets> = OnceLock::new();
    ASSETS.get_or_init(|| Assets::load(None, None).expect("procedural assets"))
}

pub fn make_context(patch: impl FnOnce(&mut SceneConfig)) -> SceneContext {
    make_context_at(0.0, 0.0, patch)
}

pub fn make_context_at(
    day: f64,
    observer_deg: f64,
    patch: impl FnOnce(&mut SceneConfig),
) -> SceneContext {
    let mut cfg = SceneConfig::default();
    patch(&mut cfg);
    let state = SimulationState::new(day, observer_deg, TimeZone::gmt());
    SceneContext::new(test_assets(), state, cfg).expect("build scene context")
}
