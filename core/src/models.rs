use chrono::Duration;
use serde::{Serialize, Serializer};

use crate::calc::{duration_hours, RoundTo};
use crate::constants::UNITS;

/// Common fields for every training session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub training_type: String,
    pub action: u32,        // repetitions: steps, or strokes when swimming
    pub len_step_m: f64,    // meters per repetition
    pub duration: Duration,
    pub weight_kg: f64,     // kg
}

impl Session {
    pub fn new(
        training_type: impl Into<String>,
        action: u32,
        len_step_m: f64,
        duration: Duration,
        weight_kg: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            action,
            len_step_m,
            duration,
            weight_kg,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub base: Session,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    pub base: Session,
    pub height_cm: f64, // cm
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub base: Session,
    pub pool_length_m: u32, // meters
    pub lap_count: u32,     // pool crossings
}

/// One session of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    pub fn session(&self) -> &Session {
        match self {
            Workout::Running(r) => &r.base,
            Workout::Walking(w) => &w.base,
            Workout::Swimming(s) => &s.base,
        }
    }
}

impl From<Running> for Workout {
    fn from(r: Running) -> Self {
        Workout::Running(r)
    }
}

impl From<Walking> for Workout {
    fn from(w: Walking) -> Self {
        Workout::Walking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(s: Swimming) -> Self {
        Workout::Swimming(s)
    }
}

/// Derived, read-only result for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub training_type: String,
    #[serde(rename = "duration_min", serialize_with = "serialize_minutes")]
    pub duration: Duration,
    #[serde(serialize_with = "serialize_2dp")]
    pub distance_km: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub mean_speed_kmh: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub calories_kcal: f64,
}

impl SessionSummary {
    /// Duration in (fractional) minutes.
    pub fn duration_min(&self) -> f64 {
        duration_hours(self.duration) * UNITS.min_in_hour
    }
}

fn serialize_minutes<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64((duration_hours(*d) * UNITS.min_in_hour).round_to(2))
}

fn serialize_2dp<S: Serializer>(x: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(x.round_to(2))
}
