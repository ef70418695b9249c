use std::fs;

use log::{debug, warn};
use svg::node::element::{ClipPath, Definitions, Group, Rectangle, Style};
use svg::Document;

use crate::assets::Assets;
use crate::config::SceneConfig;
use crate::context::SceneContext;
use crate::error::Result;
use crate::layers::{
    BackgroundLayer, ClockLayer, CompassLayer, EarthLayer, Layer, MoonLayer, ObserverLayer,
    OrbitPathLayer, PhaseLabelLayer, SunlightLayer, TitleLayer,
};
use crate::sprite::encode_png;
use crate::state::SimulationState;

// Load the default css for embedding
const DEFAULT_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/styles/scene.css"));

pub struct Scene {
    pub context: SceneContext,
    css_path: Option<String>,
}

impl Scene {
    pub fn new(
        assets: &Assets,
        state: SimulationState,
        cfg: SceneConfig,
        css_path: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            context: SceneContext::new(assets, state, cfg)?,
            css_path,
        })
    }

    fn load_css_text(&self) -> String {
        if let Some(path) = &self.css_path {
            match fs::read_to_string(path) {
                Ok(text) => return text,
                Err(err) => warn!("could not read stylesheet {path}: {err}; using embedded css"),
            }
        }
        // Embedded fallback
        DEFAULT_CSS.to_owned()
    }

    /// Layers inside the plot area, back to front, filtered by the config.
    fn plot_layers(&self) -> Vec<Box<dyn Layer>> {
        let cfg = &self.context.cfg;
        let mut layers: Vec<Box<dyn Layer>> = Vec::new();
        if cfg.include_sunlight {
            layers.push(Box::new(SunlightLayer::new()));
        }
        layers.push(Box::new(OrbitPathLayer::new()));
        layers.push(Box::new(EarthLayer::new()));
        if cfg.include_observer {
            layers.push(Box::new(ObserverLayer::new()));
        }
        layers.push(Box::new(MoonLayer::new()));
        layers.push(Box::new(CompassLayer::new()));
        if cfg.include_phase_annotation {
            layers.push(Box::new(PhaseLabelLayer::new()));
        }
        if cfg.include_time_zone {
            layers.push(Box::new(ClockLayer::new()));
        }
        layers
    }

    pub fn draw_document(&self) -> Document {
        let w = self.context.cfg.width;
        let h = self.context.cfg.height;
        let l = &self.context.layout;

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", w)
            .set("height", h)
            .set("viewBox", (0, 0, w, h))
            .set("class", "scene");

        let css = self.load_css_text();
        if !css.is_empty() {
            doc = doc.add(Style::new(css));
        }

        let clip_rect = Rectangle::new()
            .set("x", l.plot_x)
            .set("y", l.plot_y)
            .set("width", l.plot_w)
            .set("height", l.plot_h);
        let clip = ClipPath::new().set("id", "clip-scene").add(clip_rect);
        doc = doc.add(Definitions::new().add(clip));

        doc = doc.add(BackgroundLayer::new().render(&self.context));

        let layers = self.plot_layers();
        debug!("rendering {} plot layers", layers.len());
        let mut clipped = Group::new().set("clip-path", "url(#clip-scene)");
        for layer in layers {
            clipped = clipped.add(layer.render(&self.context));
        }
        doc = doc.add(clipped);

        // The title lives in the top margin
        doc.add(TitleLayer::new().render(&self.context))
    }

    pub fn to_file(&self, path: &str) -> std::io::Result<()> {
        let doc = self.draw_document();
        svg::save(path, &doc)
    }

    /// Write the lit Moon sprite on its own, the way it is shown beside the
    /// scene.
    pub fn moon_to_file(&self, path: &str) -> Result<()> {
        let png = encode_png(&self.context.sprites.lit_moon)?;
        fs::write(path, png)?;
        Ok(())
    }

    /// Caption lines for the readout next to the scene.
    pub fn caption(&self) -> Vec<String> {
        let snap = &self.context.snapshot;
        let mut lines = vec![
            format!("Moon Phase: {} {}", snap.phase.glyph(), snap.phase.name()),
            format!("Lit: {:.0}%", snap.lit_fraction * 100.0),
        ];
        if self.context.cfg.include_time_zone {
            lines.push(format!("Time: {}", snap.local_time));
            lines.push(format!("Time Zone: {}", self.context.state.time_zone.name));
        }
        lines
    }
}
