pub mod time_zones;

pub use time_zones::{load_time_zones, TimeZoneTable};
