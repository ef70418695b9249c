use svg::node::element::Group;

use crate::context::SceneContext;
use crate::geometry::project;
use crate::layers::{group_with_class, text, Layer};
use crate::types::Point;

pub struct CompassLayer {
    /// Distance of the labels inside the view limit, world units
    inset: f64,
}
impl CompassLayer {
    pub fn new() -> Self {
        Self { inset: 50_000.0 }
    }

    fn positions(&self, limit: f64) -> [(&'static str, Point); 4] {
        let d = limit - self.inset;
        [
            ("N", Point { x: 0.0, y: d }),
            ("E", Point { x: d, y: 0.0 }),
            ("S", Point { x: 0.0, y: -d }),
            ("W", Point { x: -d, y: 0.0 }),
        ]
    }
}

impl Layer for CompassLayer {
    fn render(&self, context: &SceneContext) -> Group {
        let mut g = group_with_class("compass");
        for (label, at) in self.positions(context.layout.limit) {
            let p = project(context, at);
            g = g.add(
                text("cardinal", p.x, p.y, "middle", label).set("dominant-baseline", "middle"),
            );
        }
        g
    }
}
