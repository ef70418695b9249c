use svg::node::element::{Group, Rectangle};

use crate::context::SceneContext;
use crate::layers::{group_with_class, Layer};

pub struct BackgroundLayer;
impl BackgroundLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for BackgroundLayer {
    fn render(&self, context: &SceneContext) -> Group {
        let l = &context.layout;
        group_with_class("background")
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", context.cfg.width)
                    .set("height", context.cfg.height)
                    .set("class", "page"),
            )
            .add(
                Rectangle::new()
                    .set("x", l.plot_x)
                    .set("y", l.plot_y)
                    .set("width", l.plot_w)
                    .set("height", l.plot_h)
                    .set("class", "plot"),
            )
    }
}
