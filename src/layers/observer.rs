use svg::node::element::{Circle, Group, Line};

use crate::context::SceneContext;
use crate::geometry::{polar, project, px};
use crate::layers::earth::EARTH_RADIUS;
use crate::layers::{group_with_class, Layer};
use crate::types::Point;

/// Height scale of the stick figure in world units.
pub const STICK_FIGURE_SIZE: f64 = 2_000.0;

pub struct ObserverLayer {
    size: f64,
}
impl ObserverLayer {
    pub fn new() -> Self {
        Self {
            size: STICK_FIGURE_SIZE,
        }
    }

    fn segment(context: &SceneContext, a: Point, b: Point) -> Line {
        let (pa, pb) = (project(context, a), project(context, b));
        Line::new()
            .set("x1", pa.x)
            .set("y1", pa.y)
            .set("x2", pb.x)
            .set("y2", pb.y)
    }
}

impl Layer for ObserverLayer {
    fn render(&self, context: &SceneContext) -> Group {
        let feet = polar(EARTH_RADIUS, context.state.observer_angle_deg);
        let s = self.size;
        let at = |dx: f64, dy: f64| Point {
            x: feet.x + dx * s,
            y: feet.y + dy * s,
        };

        let head = project(context, at(0.0, 0.5));
        group_with_class("observer")
            .set("data-angle", context.state.observer_angle_deg)
            .add(
                Circle::new()
                    .set("class", "observer-head")
                    .set("cx", head.x)
                    .set("cy", head.y)
                    .set("r", px(context, 0.2 * s)),
            )
            // body, arms, legs
            .add(Self::segment(context, at(0.0, 0.0), at(0.0, 0.5)))
            .add(Self::segment(context, at(-0.3, 0.25), at(0.3, 0.25)))
            .add(Self::segment(context, at(0.0, 0.0), at(-0.2, -0.3)))
            .add(Self::segment(context, at(0.0, 0.0), at(0.2, -0.3)))
    }
}
