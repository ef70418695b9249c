use svg::node::element::{Group, Line};

use crate::context::SceneContext;
use crate::geometry::{project, pull_toward_origin};
use crate::layers::moon::MOON_RADIUS;
use crate::layers::{group_with_class, text, Layer};
use crate::orbit::MOON_ORBIT_RADIUS;
use crate::types::Point;

pub struct TitleLayer;
impl TitleLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for TitleLayer {
    fn render(&self, context: &SceneContext) -> Group {
        let l = &context.layout;
        let x = l.plot_x + l.plot_w / 2.0;
        let y = (l.plot_y - 14.0).max(14.0);
        group_with_class("title").add(text("title", x, y, "middle", &context.cfg.title))
    }
}

/// Local time readout in the lower-right corner.
pub struct ClockLayer {
    right_inset: f64,
    bottom_inset: f64,
}
impl ClockLayer {
    pub fn new() -> Self {
        Self {
            right_inset: 100_000.0,
            bottom_inset: 50_000.0,
        }
    }
}

impl Layer for ClockLayer {
    fn render(&self, context: &SceneContext) -> Group {
        let limit = context.layout.limit;
        let p = project(
            context,
            Point {
                x: limit - self.right_inset,
                y: -limit + self.bottom_inset,
            },
        );
        group_with_class("clock")
            .add(
                text(
                    "local-time",
                    p.x,
                    p.y,
                    "end",
                    &format!("Time: {}", context.snapshot.local_time),
                )
                .set("dominant-baseline", "middle"),
            )
            .add(text(
                "time-zone",
                p.x,
                p.y + 18.0,
                "end",
                &context.state.time_zone.name,
            ))
    }
}

/// Phase name with a leader line pointing at the Moon sprite.
pub struct PhaseLabelLayer {
    /// How far inside the orbit the label sits, world units
    offset: f64,
}
impl PhaseLabelLayer {
    pub fn new() -> Self {
        Self { offset: 70_000.0 }
    }

    // Keep the text on the Earth side of the line so they don't overlap.
    fn anchor(moon: Point) -> &'static str {
        if moon.x > 0.25 * MOON_ORBIT_RADIUS {
            "end"
        } else if moon.x < -0.25 * MOON_ORBIT_RADIUS {
            "start"
        } else {
            "middle"
        }
    }
}

impl Layer for PhaseLabelLayer {
    fn render(&self, context: &SceneContext) -> Group {
        let snap = &context.snapshot;
        let label_at = project(context, pull_toward_origin(snap.moon, self.offset));
        let from = project(context, pull_toward_origin(snap.moon, self.offset * 0.9));
        let to = project(context, pull_toward_origin(snap.moon, MOON_RADIUS * 1.1));

        group_with_class("phase-annotation")
            .add(
                Line::new()
                    .set("class", "leader")
                    .set("x1", from.x)
                    .set("y1", from.y)
                    .set("x2", to.x)
                    .set("y2", to.y),
            )
            .add(
                text(
                    "phase-label",
                    label_at.x,
                    label_at.y,
                    Self::anchor(snap.moon),
                    &format!("{} {}", snap.phase.glyph(), snap.phase.name()),
                )
                .set("dominant-baseline", "middle"),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::render_to_string;
    use crate::orbit::MOON_ORBIT_PERIOD;
    use crate::test_utils::{make_context, make_context_at};

    #[test]
    fn title_uses_configured_text() {
        let context = make_context(|cfg| cfg.title = "Lunar Demo".to_string());
        let s = render_to_string(&TitleLayer::new(), &context);
        assert!(s.contains("Lunar Demo"));
    }

    #[test]
    fn clock_shows_local_time_and_zone() {
        let context = make_context_at(0.0, 180.0, |_| {});
        let s = render_to_string(&ClockLayer::new(), &context);
        assert!(s.contains("Time: 12:00"));
        assert!(s.contains("GMT"));
        assert!(s.contains(r#"text-anchor="end""#));
    }

    #[test]
    fn phase_label_names_the_phase() {
        let context = make_context_at(MOON_ORBIT_PERIOD * 0.75, 0.0, |_| {});
        let s = render_to_string(&PhaseLabelLayer::new(), &context);
        assert!(s.contains("Last Quarter"));
        assert!(s.contains("🌗"));
        assert!(s.contains(r#"class="leader""#));
    }

    #[test]
    fn phase_label_anchor_faces_earth() {
        assert_eq!(PhaseLabelLayer::anchor(Point { x: MOON_ORBIT_RADIUS, y: 0.0 }), "end");
        assert_eq!(PhaseLabelLayer::anchor(Point { x: -MOON_ORBIT_RADIUS, y: 0.0 }), "start");
        assert_eq!(PhaseLabelLayer::anchor(Point { x: 0.0, y: MOON_ORBIT_RADIUS }), "middle");
    }

    #[test]
    fn leader_line_ends_outside_the_sprite() {
        let context = make_context(|_| {});
        let moon = context.snapshot.moon;
        let end = pull_toward_origin(moon, MOON_RADIUS * 1.1);
        let gap = moon.length() - end.length();
        assert!(gap > MOON_RADIUS);
    }
}
