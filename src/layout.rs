use crate::config::SceneConfig;
use crate::orbit::MOON_ORBIT_RADIUS;
use crate::types::Point;

/// The visible world extends this far past the orbit on every side.
pub const VIEW_LIMIT_FACTOR: f64 = 1.2;

#[derive(Debug, Clone, Copy)]
pub struct SceneLayout {
    pub plot_x: f64,
    pub plot_y: f64,
    pub plot_w: f64,
    pub plot_h: f64,
    pub center_px: Point,
    /// Pixels per world unit
    pub scale: f64,
    /// Half-width of the visible world square, in world units
    pub limit: f64,
}

impl From<&SceneConfig> for SceneLayout {
    fn from(cfg: &SceneConfig) -> Self {
        let plot_x = cfg.margin.left as f64;
        let plot_y = cfg.margin.top as f64;
        let plot_w = cfg
            .width
            .saturating_sub(cfg.margin.left + cfg.margin.right)
            .max(1) as f64;
        let plot_h = cfg
            .height
            .saturating_sub(cfg.margin.top + cfg.margin.bottom)
            .max(1) as f64;
        let center_px = Point {
            x: plot_x + plot_w / 2.0,
            y: plot_y + plot_h / 2.0,
        };

        // Equal aspect: the limit square fits the shorter side
        let limit = MOON_ORBIT_RADIUS * VIEW_LIMIT_FACTOR;
        let radius_px = plot_w.min(plot_h) / 2.0;
        let scale = radius_px / limit;

        Self {
            plot_x,
            plot_y,
            plot_w,
            plot_h,
            center_px,
            scale,
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    #[test]
    fn default_layout_centers_the_plot() {
        let l = SceneLayout::from(&SceneConfig::default());
        assert!(approx(l.center_px.x, 400.0, 1e-12));
        assert!(approx(l.center_px.y, 400.0, 1e-12));
        assert!(approx(l.plot_w, 720.0, 1e-12));
        assert!(approx(l.limit, 461_280.0, 1e-6));
        // The view limit maps onto the plot edge
        assert!(approx(l.limit * l.scale, 360.0, 1e-9));
    }

    #[test]
    fn non_square_layout_fits_the_shorter_side() {
        let cfg = SceneConfig {
            width: 1000,
            height: 600,
            ..SceneConfig::default()
        };
        let l = SceneLayout::from(&cfg);
        assert!(approx(l.limit * l.scale, 260.0, 1e-9));
        assert!(approx(l.center_px.x, 500.0, 1e-12));
    }

    #[test]
    fn tiny_canvas_does_not_underflow() {
        let cfg = SceneConfig {
            width: 10,
            height: 10,
            ..SceneConfig::default()
        };
        let l = SceneLayout::from(&cfg);
        assert!(l.scale > 0.0 && l.scale.is_finite());
    }
}
