use chrono::Duration;

use crate::calc::{duration_hours, mean_speed_kmh, swim_mean_speed_kmh};
use crate::constants::Units;
use crate::models::{Running, Swimming, Walking};

// ──────────────────────────────────────────────────────────────────────────────
// Running
// ──────────────────────────────────────────────────────────────────────────────
pub const RUN_SPEED_MULT: f64 = 18.0;  // mean speed multiplier
pub const RUN_SPEED_SHIFT: f64 = 1.79; // mean speed shift

pub fn running_calories(r: &Running, units: &Units) -> f64 {
    let s = &r.base;
    let speed = mean_speed_kmh(s, units);
    (RUN_SPEED_MULT * speed + RUN_SPEED_SHIFT) * s.weight_kg / units.m_in_km
        * duration_hours(s.duration)
        * units.min_in_hour
}

// ──────────────────────────────────────────────────────────────────────────────
// Walking
// ──────────────────────────────────────────────────────────────────────────────
pub const WALK_WEIGHT_MULT: f64 = 0.035;       // weight coefficient
pub const WALK_SPEED_HEIGHT_MULT: f64 = 0.029; // speed²/height coefficient

/// Speed in m/s is derived from the session mean speed in km/h.
pub fn walking_calories(w: &Walking, units: &Units) -> f64 {
    let s = &w.base;
    let height_m = w.height_cm / units.cm_in_m;
    let speed_ms = mean_speed_kmh(s, units) * units.kmh_in_ms;
    (WALK_WEIGHT_MULT * s.weight_kg
        + (speed_ms.powi(2) / height_m) * WALK_SPEED_HEIGHT_MULT * s.weight_kg)
        * duration_hours(s.duration)
        * units.min_in_hour
}

// ──────────────────────────────────────────────────────────────────────────────
// Swimming
// ──────────────────────────────────────────────────────────────────────────────
pub const SWIM_SPEED_SHIFT: f64 = 1.1;  // mean speed shift
pub const SWIM_WEIGHT_MULT: f64 = 2.0;  // weight multiplier

pub fn swimming_calories(sw: &Swimming, units: &Units) -> f64 {
    let s = &sw.base;
    if s.duration == Duration::zero() {
        return 0.0;
    }
    (swim_mean_speed_kmh(sw, units) + SWIM_SPEED_SHIFT)
        * SWIM_WEIGHT_MULT
        * s.weight_kg
        * duration_hours(s.duration)
}
