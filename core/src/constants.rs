// core/src/constants.rs
use serde::{Deserialize, Serialize};

/// Step length (m) for running and walking sessions.
pub const LEN_STEP_M: f64 = 0.65;
/// Stroke length (m) for swimming sessions.
pub const SWIM_STROKE_M: f64 = 1.38;

/// Conversion factors shared by every calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Units {
    pub m_in_km: f64,      // meters per kilometer
    pub min_in_hour: f64,  // minutes per hour
    pub cm_in_m: f64,      // centimeters per meter
    pub kmh_in_ms: f64,    // km/h -> m/s (rounded factor)
}

pub const UNITS: Units = Units {
    m_in_km: 1000.0,
    min_in_hour: 60.0,
    cm_in_m: 100.0,
    kmh_in_ms: 0.278,
};

impl Default for Units {
    fn default() -> Self {
        UNITS
    }
}

pub const NS_IN_HOUR: f64 = 3_600_000_000_000.0;
pub const US_IN_HOUR: f64 = 3_600_000_000.0;
pub const MS_IN_HOUR: f64 = 3_600_000.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_units_match_const() {
        assert_eq!(Units::default(), UNITS);
        assert_eq!(UNITS.m_in_km, 1000.0);
        assert_eq!(UNITS.min_in_hour, 60.0);
    }

    #[test]
    fn units_serialize_roundtrip_keeps_factors() {
        let json = serde_json::to_string(&UNITS).unwrap();
        let back: Units = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UNITS);
    }
}
