use svg::node::element::path::Data;
use svg::node::element::{Group, Line, Path};

use crate::context::SceneContext;
use crate::geometry::project;
use crate::layers::{group_with_class, text, Layer};
use crate::orbit::MOON_ORBIT_RADIUS;
use crate::types::Point;

/// Parallel arrows coming in from the east edge, pointing west toward Earth.
pub struct SunlightLayer {
    /// Arrow heights as fractions of the orbit radius
    rows: [f64; 4],
    /// Arrow length in world units
    length: f64,
    /// Arrowhead length in pixels
    head_px: f64,
}
impl SunlightLayer {
    pub fn new() -> Self {
        Self {
            rows: [-0.7, -0.35, 0.35, 0.7],
            length: 80_000.0,
            head_px: 8.0,
        }
    }

    fn arrowhead(&self, tip: Point) -> Path {
        let h = self.head_px;
        let d = Data::new()
            .move_to((tip.x, tip.y))
            .line_to((tip.x + h, tip.y - h / 2.0))
            .line_to((tip.x + h, tip.y + h / 2.0))
            .close();
        Path::new().set("class", "sunlight-head").set("d", d)
    }
}

impl Layer for SunlightLayer {
    fn render(&self, context: &SceneContext) -> Group {
        let mut g = group_with_class("sunlight");
        let tail_x = context.layout.limit - 10_000.0;
        let tip_x = tail_x - self.length;

        for row in self.rows {
            let y = row * MOON_ORBIT_RADIUS;
            let tail = project(context, Point { x: tail_x, y });
            let tip = project(context, Point { x: tip_x, y });
            g = g.add(
                Line::new()
                    .set("class", "sunlight-ray")
                    .set("x1", tail.x)
                    .set("y1", tail.y)
                    .set("x2", tip.x)
                    .set("y2", tip.y),
            );
            g = g.add(self.arrowhead(tip));
        }

        let label = project(
            context,
            Point {
                x: tail_x - self.length / 2.0,
                y: 0.85 * MOON_ORBIT_RADIUS,
            },
        );
        g.add(text("sunlight-label", label.x, label.y, "middle", "Sunlight"))
    }
}
