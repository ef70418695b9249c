//! Circular Earth-Moon orbit model.
//!
//! Everything here is a pure function of the simulated day (plus the observer
//! angle and time-zone offset for local time). The orbit is a fixed circle and
//! phases are assigned by linear division of the orbit fraction, not by a true
//! Sun-Earth-Moon phase angle.

use std::f64::consts::TAU;

use crate::state::SimulationState;
use crate::types::{format_hhmm, MoonPhase, Point};

/// Average Earth-Moon distance, used directly as display units.
pub const MOON_ORBIT_RADIUS: f64 = 384_400.0;
/// Simulated days per revolution.
pub const MOON_ORBIT_PERIOD: f64 = 27.32;
/// Hours per Earth rotation.
pub const EARTH_ROTATION_PERIOD: f64 = 24.0;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSnapshot {
    pub moon: Point,
    pub phase_angle: f64,
    pub phase: MoonPhase,
    pub local_time: String,
    pub lit_fraction: f64,
}

pub fn orbital_angle(day: f64) -> f64 {
    TAU * (day / MOON_ORBIT_PERIOD)
}

pub fn moon_position(day: f64) -> Point {
    let angle = orbital_angle(day);
    Point {
        x: MOON_ORBIT_RADIUS * angle.cos(),
        y: MOON_ORBIT_RADIUS * angle.sin(),
    }
}

pub fn phase_index(day: f64) -> usize {
    let eighths = (day / MOON_ORBIT_PERIOD * 8.0).rem_euclid(8.0);
    // rem_euclid can round up to exactly 8.0 for tiny negative inputs
    (eighths.floor() as usize).min(7)
}

pub fn moon_phase(day: f64) -> MoonPhase {
    MoonPhase::from_index(phase_index(day))
}

/// Fraction of the sprite left lit. 1.0 at day 0, 0.0 half an orbit later.
pub fn lit_fraction(angle: f64) -> f64 {
    (0.5 * (1.0 + angle.cos())).clamp(0.0, 1.0)
}

/// Fractional hour of day for an observer standing at `observer_deg` on the
/// Earth's edge, shifted by a whole-hour zone offset. Always in [0, 24).
pub fn local_hour(observer_deg: f64, offset_hours: i32) -> f64 {
    let rotation = observer_deg.rem_euclid(360.0);
    let hour = (rotation / 360.0 * EARTH_ROTATION_PERIOD + offset_hours as f64)
        .rem_euclid(EARTH_ROTATION_PERIOD);
    if hour >= EARTH_ROTATION_PERIOD {
        0.0
    } else {
        hour
    }
}

pub fn local_time(observer_deg: f64, offset_hours: i32) -> String {
    format_hhmm(local_hour(observer_deg, offset_hours))
}

pub fn snapshot(state: &SimulationState) -> OrbitSnapshot {
    let phase_angle = orbital_angle(state.current_day);
    OrbitSnapshot {
        moon: moon_position(state.current_day),
        phase_angle,
        phase: moon_phase(state.current_day),
        local_time: local_time(state.observer_angle_deg, state.time_zone.offset_hours),
        lit_fraction: lit_fraction(phase_angle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;
    use crate::types::TimeZone;

    const P: f64 = MOON_ORBIT_PERIOD;

    #[test]
    fn phase_index_is_periodic() {
        for day in [0.3, 2.0, 5.5, 10.0, 13.1, 17.9, 21.0, 26.5] {
            let base = phase_index(day);
            for k in 1..=4 {
                assert_eq!(phase_index(day + k as f64 * P), base, "day={day} k={k}");
            }
        }
    }

    #[test]
    fn phase_index_stays_in_range_for_negative_days() {
        assert_eq!(phase_index(-0.1), 7);
        assert_eq!(phase_index(-P / 2.0 - 0.1), 3);
        assert!(phase_index(-1e-300) <= 7);
    }

    #[test]
    fn phase_scenarios() {
        assert_eq!(moon_phase(0.0), MoonPhase::New);
        assert_eq!(phase_index(P / 4.0), 2);
        assert_eq!(moon_phase(P / 4.0).name(), "First Quarter");
        assert_eq!(phase_index(P * 0.75), 6);
        assert_eq!(moon_phase(P * 0.75).name(), "Last Quarter");
        assert_eq!(moon_phase(P / 2.0), MoonPhase::Full);
    }

    #[test]
    fn lit_fraction_endpoints_and_symmetry() {
        assert!(approx(lit_fraction(orbital_angle(0.0)), 1.0, 1e-12));
        assert!(approx(lit_fraction(orbital_angle(P / 2.0)), 0.0, 1e-12));
        for day in [1.0, 3.3, 7.0, 12.5, 20.0] {
            let a = lit_fraction(orbital_angle(day));
            let b = lit_fraction(orbital_angle(P - day));
            assert!(approx(a, b, 1e-9), "day={day}: {a} vs {b}");
        }
    }

    #[test]
    fn moon_stays_on_orbit_circle() {
        let r2 = MOON_ORBIT_RADIUS * MOON_ORBIT_RADIUS;
        let mut day = 0.0;
        while day < P {
            let p = moon_position(day);
            assert!(approx(p.x * p.x + p.y * p.y, r2, r2 * 1e-12), "day={day}");
            day += 0.37;
        }
    }

    #[test]
    fn moon_starts_on_positive_x_axis() {
        let p = moon_position(0.0);
        assert!(approx(p.x, MOON_ORBIT_RADIUS, 1e-9));
        assert!(approx(p.y, 0.0, 1e-9));

        let q = moon_position(P / 4.0);
        assert!(approx(q.x, 0.0, 1e-6));
        assert!(approx(q.y, MOON_ORBIT_RADIUS, 1e-6));
    }

    #[test]
    fn local_time_formats_and_normalizes() {
        assert_eq!(local_time(0.0, 0), "00:00");
        assert_eq!(local_time(180.0, 0), "12:00");
        assert_eq!(local_time(0.0, -5), "19:00");
        assert_eq!(local_time(90.0, 8), "14:00");
        assert_eq!(local_time(330.0, 11), "09:00");
        // 7.5° is half an hour
        assert_eq!(local_time(7.5, 0), "00:30");
        // observer angles outside [0, 360) wrap
        assert_eq!(local_time(540.0, 0), "12:00");
        assert_eq!(local_time(-90.0, 0), "18:00");
    }

    #[test]
    fn local_hour_is_always_in_a_day() {
        for deg in [-720.0, -1e-12, 0.0, 359.999, 1e9] {
            for tz in [-12, -5, 0, 8, 11, 14] {
                let h = local_hour(deg, tz);
                assert!((0.0..24.0).contains(&h), "deg={deg} tz={tz} h={h}");
            }
        }
    }

    #[test]
    fn snapshot_combines_model_outputs() {
        let state = SimulationState {
            current_day: P / 4.0,
            observer_angle_deg: 180.0,
            time_zone: TimeZone::new("Beijing (CST)", 8),
        };
        let snap = snapshot(&state);
        assert_eq!(snap.phase, MoonPhase::FirstQuarter);
        assert_eq!(snap.local_time, "20:00");
        assert!(approx(snap.lit_fraction, 0.5, 1e-9));
        assert!(approx(snap.phase_angle, TAU / 4.0, 1e-12));
        assert!(approx(snap.moon.length(), MOON_ORBIT_RADIUS, 1e-6));
    }

    #[test]
    fn snapshot_at_start_is_new_and_fully_lit() {
        let snap = snapshot(&SimulationState::default());
        assert_eq!(snap.phase.name(), "New Moon");
        assert!(approx(snap.lit_fraction, 1.0, 1e-12));
        assert_eq!(snap.local_time, "00:00");
    }
}
