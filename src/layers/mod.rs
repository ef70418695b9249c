use svg::node::element::{Group, Image, Text as TextEl};

use crate::context::SceneContext;
use crate::types::Point;

pub trait Layer {
    /// Produce an SVG group for this layer.
    fn render(&self, context: &SceneContext) -> Group;
}

pub fn group_with_class(class: &str) -> Group {
    let mut g = Group::new();
    g = g.set("class", class);
    g
}

pub fn text(class: &str, x: f64, y: f64, anchor: &str, content: &str) -> TextEl {
    TextEl::new(content)
        .set("class", class)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
}

/// Square image centered on `center` (pixels) with half-size `r` (pixels).
/// The sprite is stretched to fill the square.
pub fn sprite(class: &str, center: Point, r: f64, href: &str) -> Image {
    Image::new()
        .set("class", class)
        .set("x", center.x - r)
        .set("y", center.y - r)
        .set("width", 2.0 * r)
        .set("height", 2.0 * r)
        .set("preserveAspectRatio", "none")
        .set("href", href)
}

pub mod annotations;
pub mod background;
pub mod compass;
pub mod earth;
pub mod moon;
pub mod observer;
pub mod orbit_path;
pub mod sunlight;

pub use annotations::{ClockLayer, PhaseLabelLayer, TitleLayer};
pub use background::BackgroundLayer;
pub use compass::CompassLayer;
pub use earth::EarthLayer;
pub use moon::MoonLayer;
pub use observer::ObserverLayer;
pub use orbit_path::OrbitPathLayer;
pub use sunlight::SunlightLayer;

#[cfg(test)]
pub(crate) fn render_to_string(layer: &dyn Layer, context: &SceneContext) -> String {
    layer.render(context).to_string()
}
