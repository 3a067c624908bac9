use std::fmt;

use log::debug;
use serde_json::Value;

use crate::calc::{distance_km, mean_speed_kmh, swim_mean_speed_kmh};
use crate::calories::{running_calories, swimming_calories, walking_calories};
use crate::constants::UNITS;
use crate::models::{Running, Session, SessionSummary, Swimming, Walking, Workout};

/// What the report layer needs from a session: calories and a summary.
pub trait CaloriesCalculator {
    fn calories_kcal(&self) -> f64;
    fn summarize(&self) -> SessionSummary;
}

fn summary_from(s: &Session, mean_speed_kmh: f64, calories_kcal: f64) -> SessionSummary {
    let summary = SessionSummary {
        training_type: s.training_type.clone(),
        duration: s.duration,
        distance_km: distance_km(s, &UNITS),
        mean_speed_kmh,
        calories_kcal,
    };
    debug!(
        "[summary] {}: {:.3} km, {:.3} km/h, {:.3} kcal",
        summary.training_type, summary.distance_km, summary.mean_speed_kmh, summary.calories_kcal
    );
    summary
}

impl CaloriesCalculator for Running {
    fn calories_kcal(&self) -> f64 {
        running_calories(self, &UNITS)
    }

    fn summarize(&self) -> SessionSummary {
        summary_from(&self.base, mean_speed_kmh(&self.base, &UNITS), self.calories_kcal())
    }
}

impl CaloriesCalculator for Walking {
    fn calories_kcal(&self) -> f64 {
        walking_calories(self, &UNITS)
    }

    fn summarize(&self) -> SessionSummary {
        summary_from(&self.base, mean_speed_kmh(&self.base, &UNITS), self.calories_kcal())
    }
}

impl CaloriesCalculator for Swimming {
    fn calories_kcal(&self) -> f64 {
        swimming_calories(self, &UNITS)
    }

    fn summarize(&self) -> SessionSummary {
        summary_from(&self.base, swim_mean_speed_kmh(self, &UNITS), self.calories_kcal())
    }
}

impl CaloriesCalculator for Workout {
    fn calories_kcal(&self) -> f64 {
        match self {
            Workout::Running(r) => r.calories_kcal(),
            Workout::Walking(w) => w.calories_kcal(),
            Workout::Swimming(s) => s.calories_kcal(),
        }
    }

    fn summarize(&self) -> SessionSummary {
        match self {
            Workout::Running(r) => r.summarize(),
            Workout::Walking(w) => w.summarize(),
            Workout::Swimming(s) => s.summarize(),
        }
    }
}

/// Fixed five-line report; every line ends with '\n'.
pub fn format_summary(m: &SessionSummary) -> String {
    format!(
        "Training type: {}\nDuration: {:.0} min\nDistance: {:.2} km\nAvg. speed: {:.2} km/h\nCalories burned: {:.2}\n",
        m.training_type,
        m.duration_min(),
        m.distance_km,
        m.mean_speed_kmh,
        m.calories_kcal,
    )
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_summary(self))
    }
}

/// Report text for any session kind.
pub fn read_data(training: &dyn CaloriesCalculator) -> String {
    format_summary(&training.summarize())
}

/// Summary as JSON, numbers rounded to 2 decimals.
pub fn summary_json(m: &SessionSummary) -> Result<Value, serde_json::Error> {
    serde_json::to_value(m)
}
