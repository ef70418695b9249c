use svg::node::element::Group;

use crate::context::SceneContext;
use crate::geometry::{project, px};
use crate::layers::{group_with_class, sprite, Layer};
use crate::types::Point;

/// Radius of the Earth sprite in world units.
pub const EARTH_RADIUS: f64 = 20_000.0;

pub struct EarthLayer;
impl EarthLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for EarthLayer {
    fn render(&self, context: &SceneContext) -> Group {
        let center = project(context, Point::origin());
        let r = px(context, EARTH_RADIUS);
        group_with_class("earth").add(sprite(
            "earth-sprite",
            center,
            r,
            &context.sprites.earth_href,
        ))
    }
}
