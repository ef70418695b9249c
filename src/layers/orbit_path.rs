use svg::node::element::{Circle, Group};

use crate::context::SceneContext;
use crate::geometry::{project, px};
use crate::layers::{group_with_class, Layer};
use crate::orbit::MOON_ORBIT_RADIUS;
use crate::types::Point;

pub struct OrbitPathLayer {
    dash: &'static str,
}
impl OrbitPathLayer {
    pub fn new() -> Self {
        Self { dash: "8 6" }
    }
}

impl Layer for OrbitPathLayer {
    fn render(&self, context: &SceneContext) -> Group {
        let c = project(context, Point::origin());
        group_with_class("orbit").add(
            Circle::new()
                .set("class", "orbit-path")
                .set("cx", c.x)
                .set("cy", c.y)
                .set("r", px(context, MOON_ORBIT_RADIUS))
                .set("fill", "none")
                .set("stroke-dasharray", self.dash),
        )
    }
}
