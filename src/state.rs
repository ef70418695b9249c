use crate::orbit::MOON_ORBIT_PERIOD;
use crate::types::TimeZone;

/// Degrees the observer moves around the Earth per spin.
pub const OBSERVER_STEP_DEG: f64 = 30.0;

/// The single mutable source of truth for a simulation run. Transitions take
/// the previous state by value and hand back the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub current_day: f64,
    pub observer_angle_deg: f64,
    pub time_zone: TimeZone,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            current_day: 0.0,
            observer_angle_deg: 0.0,
            time_zone: TimeZone::gmt(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AdvanceDay,
    RotateObserver,
    SelectTimeZone(TimeZone),
    Reset,
}

impl SimulationState {
    /// Build a state from arbitrary user input, wrapping day and angle into
    /// their ranges.
    pub fn new(day: f64, observer_angle_deg: f64, time_zone: TimeZone) -> Self {
        Self {
            current_day: wrap_day(day),
            observer_angle_deg: wrap_angle(observer_angle_deg),
            time_zone,
        }
    }

    pub fn advance_day(self) -> Self {
        let next = self.current_day + 1.0;
        Self {
            current_day: if next > MOON_ORBIT_PERIOD { 0.0 } else { next },
            ..self
        }
    }

    pub fn rotate_observer(self) -> Self {
        let next = self.observer_angle_deg + OBSERVER_STEP_DEG;
        Self {
            observer_angle_deg: if next >= 360.0 { 0.0 } else { next },
            ..self
        }
    }

    pub fn select_time_zone(self, time_zone: TimeZone) -> Self {
        Self { time_zone, ..self }
    }

    /// Back to day 0 with the observer at noon position. The selected time
    /// zone is kept.
    pub fn reset(self) -> Self {
        Self {
            current_day: 0.0,
            observer_angle_deg: 0.0,
            ..self
        }
    }

    pub fn apply(self, action: &Action) -> Self {
        match action {
            Action::AdvanceDay => self.advance_day(),
            Action::RotateObserver => self.rotate_observer(),
            Action::SelectTimeZone(tz) => self.select_time_zone(tz.clone()),
            Action::Reset => self.reset(),
        }
    }
}

fn wrap_day(day: f64) -> f64 {
    if !day.is_finite() {
        return 0.0;
    }
    let d = day.rem_euclid(MOON_ORBIT_PERIOD);
    if d >= MOON_ORBIT_PERIOD { 0.0 } else { d }
}

fn wrap_angle(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let a = deg.rem_euclid(360.0);
    if a >= 360.0 { 0.0 } else { a }
}
