use crate::types::Variant;

#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}
impl Margin {
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            bottom: px,
            left: px,
            right: px,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub title: String,
    pub include_observer: bool,
    pub include_sunlight: bool,
    pub include_time_zone: bool,
    pub include_phase_annotation: bool,
}
impl SceneConfig {
    /// Overlay flags for one of the preset variants; everything else default.
    pub fn for_variant(variant: Variant) -> Self {
        let (observer, sunlight, time_zone) = match variant {
            Variant::Basic => (false, false, false),
            Variant::Sunlight => (false, true, false),
            Variant::Full => (true, true, true),
        };
        Self {
            include_observer: observer,
            include_sunlight: sunlight,
            include_time_zone: time_zone,
            ..Self::default()
        }
    }
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            margin: Margin::uniform(40),
            title: "Moon Orbit Simulation".to_string(),
            include_observer: true,
            include_sunlight: true,
            include_time_zone: true,
            include_phase_annotation: true,
        }
    }
}
