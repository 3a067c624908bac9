// core/src/calc.rs
use chrono::Duration;

use crate::constants::{Units, MS_IN_HOUR, NS_IN_HOUR, US_IN_HOUR};
use crate::models::{Session, Swimming};

// --- RoundTo trait (public, used by the summary serializer) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Duration in fractional hours. Nanosecond resolution; spans too long
/// for i64 nanoseconds (~292 years) fall back to coarser units.
pub fn duration_hours(d: Duration) -> f64 {
    if let Some(ns) = d.num_nanoseconds() {
        return ns as f64 / NS_IN_HOUR;
    }
    match d.num_microseconds() {
        Some(us) => us as f64 / US_IN_HOUR,
        None => d.num_milliseconds() as f64 / MS_IN_HOUR,
    }
}

/// Distance (km) = repetitions * length per repetition.
#[inline]
pub fn distance_km(s: &Session, units: &Units) -> f64 {
    s.action as f64 * s.len_step_m / units.m_in_km
}

/// Mean speed (km/h) over the whole session. 0 for a zero-length session.
pub fn mean_speed_kmh(s: &Session, units: &Units) -> f64 {
    let hours = duration_hours(s.duration);
    if hours == 0.0 {
        return 0.0;
    }
    distance_km(s, units) / hours
}

/// Swimming speed comes from pool geometry, not from strokes.
/// Distance stays on the stroke-based formula above.
pub fn swim_mean_speed_kmh(s: &Swimming, units: &Units) -> f64 {
    let hours = duration_hours(s.base.duration);
    if hours == 0.0 {
        return 0.0;
    }
    let pool_m = s.pool_length_m as f64 * s.lap_count as f64;
    pool_m / units.m_in_km / hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LEN_STEP_M, SWIM_STROKE_M, UNITS};

    fn session(action: u32, step: f64, minutes: i64) -> Session {
        Session::new("Running", action, step, Duration::minutes(minutes), 85.0)
    }

    #[test]
    fn round_to_two_places() {
        assert_eq!(1.23456_f64.round_to(2), 1.23);
        assert_eq!(2.5f64.round_to(0), 3.0);
    }

    #[test]
    fn duration_hours_handles_minutes() {
        assert!((duration_hours(Duration::minutes(90)) - 1.5).abs() < 1e-12);
        assert_eq!(duration_hours(Duration::zero()), 0.0);
    }

    #[test]
    fn duration_hours_keeps_sub_millisecond_part() {
        let h = duration_hours(Duration::nanoseconds(1_500_999));
        assert!((h - 1_500_999.0 / 3.6e12).abs() < 1e-18);
        assert!(duration_hours(Duration::microseconds(900)) > 0.0);
        assert!(duration_hours(Duration::nanoseconds(-1)) < 0.0);
    }

    #[test]
    fn duration_hours_very_long_span() {
        let d = Duration::days(200 * 365 * 2); // past i64 nanoseconds
        assert!(d.num_nanoseconds().is_none());
        let h = duration_hours(d);
        assert!((h - 400.0 * 365.0 * 24.0).abs() < 1e-6);
    }

    #[test]
    fn distance_from_steps() {
        let s = session(5000, LEN_STEP_M, 30);
        assert!((distance_km(&s, &UNITS) - 3.25).abs() < 1e-9);
    }

    #[test]
    fn mean_speed_guard_zero_duration() {
        let s = session(5000, LEN_STEP_M, 0);
        assert_eq!(mean_speed_kmh(&s, &UNITS), 0.0);
    }

    #[test]
    fn swim_speed_uses_pool_geometry() {
        let sw = Swimming {
            base: Session::new("Swimming", 2000, SWIM_STROKE_M, Duration::minutes(90), 85.0),
            pool_length_m: 50,
            lap_count: 5,
        };
        let v = swim_mean_speed_kmh(&sw, &UNITS);
        assert!((v - 250.0 / 1000.0 / 1.5).abs() < 1e-12);
        // distance still follows strokes
        assert!((distance_km(&sw.base, &UNITS) - 2.76).abs() < 1e-9);
    }

    #[test]
    fn swim_speed_guard_zero_duration() {
        let sw = Swimming {
            base: Session::new("Swimming", 2000, SWIM_STROKE_M, Duration::zero(), 85.0),
            pool_length_m: 50,
            lap_count: 5,
        };
        let v = swim_mean_speed_kmh(&sw, &UNITS);
        assert_eq!(v, 0.0);
        assert!(v.is_finite());
    }
}
