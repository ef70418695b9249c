use crate::context::SceneContext;
use crate::types::Point;

#[inline]
pub fn to_pixels(world: Point, center_px: Point, scale: f64) -> Point {
    Point {
        x: center_px.x + world.x * scale,
        y: center_px.y - world.y * scale,
    }
}

/// World point at `radius` from the origin, `angle_deg` counterclockwise from +x.
#[inline]
pub fn polar(radius: f64, angle_deg: f64) -> Point {
    let a = angle_deg.to_radians();
    Point {
        x: radius * a.cos(),
        y: radius * a.sin(),
    }
}

/// Move `p` toward the origin by `by` world units along its radius.
pub fn pull_toward_origin(p: Point, by: f64) -> Point {
    let len = p.length();
    if len == 0.0 {
        return p;
    }
    let k = (len - by) / len;
    Point {
        x: p.x * k,
        y: p.y * k,
    }
}

/// Shorthand for mapping through the context's layout.
pub fn project(context: &SceneContext, world: Point) -> Point {
    to_pixels(world, context.layout.center_px, context.layout.scale)
}

/// World length to pixels.
pub fn px(context: &SceneContext, world_len: f64) -> f64 {
    world_len * context.layout.scale
}
