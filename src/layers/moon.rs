use svg::node::element::Group;

use crate::context::SceneContext;
use crate::geometry::{project, px};
use crate::layers::{group_with_class, sprite, Layer};

/// Radius of the Moon sprite in world units.
pub const MOON_RADIUS: f64 = 15_000.0;

pub struct MoonLayer;
impl MoonLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for MoonLayer {
    fn render(&self, context: &SceneContext) -> Group {
        let center = project(context, context.snapshot.moon);
        let r = px(context, MOON_RADIUS);
        group_with_class("moon")
            .set("data-phase", context.snapshot.phase.name())
            .add(sprite("moon-sprite", center, r, &context.sprites.moon_href))
    }
}
