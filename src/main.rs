mod assets;
mod config;
mod context;
mod data;
mod error;
mod geometry;
mod layers;
mod layout;
mod orbit;
mod scene;
mod sprite;
mod state;
mod types;

use crate::assets::Assets;
use crate::config::{Margin, SceneConfig};
use crate::data::{load_time_zones, TimeZoneTable};
use crate::scene::Scene;
use crate::state::{Action, SimulationState};
use crate::types::Variant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "moonorbit")]
#[command(about = "Simple Earth-Moon orbit and phase scenes", version)]
struct Args {
    /// Output SVG path
    #[arg(short = 'o', long = "out")]
    out: String,

    /// Optional path for the lit Moon sprite on its own, as PNG
    #[arg(long)]
    moon_out: Option<String>,

    /// Earth texture; a procedural globe is drawn if omitted
    #[arg(long)]
    earth: Option<String>,

    /// Moon texture; a procedural moon is drawn if omitted
    #[arg(long)]
    moon: Option<String>,

    /// Starting day of the orbit, wrapped into one period
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    day: f64,

    /// Starting observer angle around the Earth in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    observer: f64,

    /// Starting time zone by name (e.g. "Beijing (CST)")
    #[arg(long)]
    time_zone: Option<String>,

    /// Optional `name,offset` CSV replacing the built-in time zones
    #[arg(long)]
    time_zones: Option<String>,

    /// Comma-separated actions to replay: advance, spin, reset, tz=<name>
    #[arg(long, default_value = "")]
    actions: String,

    /// Which overlays to draw: basic, sunlight, or full
    #[arg(long, default_value = "full")]
    variant: String,

    /// Leave out the phase name next to the Moon
    #[arg(long)]
    no_phase_label: bool,

    /// Optional CSS override file path; if omitted embedded CSS is used
    #[arg(long)]
    css: Option<String>,

    /// Output image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,
}

fn parse_variant(s: &str) -> Result<Variant> {
    Variant::from_str(&s.to_lowercase())
        .ok_or_else(|| anyhow!("invalid variant '{s}'. Use: basic | sunlight | full"))
}

fn parse_action(s: &str, zones: &TimeZoneTable) -> Result<Action> {
    let s = s.trim();
    if let Some(name) = s.strip_prefix("tz=") {
        return Ok(Action::SelectTimeZone(zones.find(name)?));
    }
    match s.to_lowercase().as_str() {
        "advance" => Ok(Action::AdvanceDay),
        "spin" => Ok(Action::RotateObserver),
        "reset" => Ok(Action::Reset),
        _ => Err(anyhow!(
            "invalid action '{s}'. Use: advance | spin | reset | tz=<name>"
        )),
    }
}

fn parse_actions(s: &str, zones: &TimeZoneTable) -> Result<Vec<Action>> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| parse_action(part, zones))
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let variant = parse_variant(&args.variant)?;
    let zones = load_time_zones(args.time_zones.as_deref())
        .with_context(|| format!("loading time zones {:?}", args.time_zones))?;
    debug!("{} time zones available", zones.zones().len());
    let time_zone = match &args.time_zone {
        Some(name) => zones.find(name)?,
        None => zones.default_zone(),
    };
    let actions = parse_actions(&args.actions, &zones)?;

    // Textures must load before anything is drawn
    let assets = Assets::load(args.earth.as_deref(), args.moon.as_deref())
        .context("loading textures")?;

    let mut state = SimulationState::new(args.day, args.observer, time_zone);
    for action in &actions {
        state = state.apply(action);
        debug!("{action:?} -> {state:?}");
    }

    let cfg = SceneConfig {
        width: args.width,
        height: args.height,
        margin: Margin::uniform(40),
        include_phase_annotation: !args.no_phase_label,
        ..SceneConfig::for_variant(variant)
    };

    let scene = Scene::new(&assets, state, cfg, args.css)?;
    debug!("snapshot {:?}", scene.context.snapshot);

    scene
        .to_file(&args.out)
        .with_context(|| format!("writing {}", args.out))?;
    info!("wrote scene to {}", args.out);

    if let Some(path) = &args.moon_out {
        scene
            .moon_to_file(path)
            .with_context(|| format!("writing {path}"))?;
        info!("wrote moon sprite to {path}");
    }

    for line in scene.caption() {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod test_utils;
