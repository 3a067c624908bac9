pub mod calc;
pub mod calories;
pub mod cli;
pub mod constants;
pub mod errors;
pub mod models;
pub mod report;

pub use calc::{distance_km, duration_hours, mean_speed_kmh, swim_mean_speed_kmh, RoundTo};
pub use calories::{running_calories, swimming_calories, walking_calories};
pub use constants::{Units, LEN_STEP_M, SWIM_STROKE_M, UNITS};
pub use errors::SessionError;
pub use models::{Running, Session, SessionSummary, Swimming, Walking, Workout};
pub use report::{format_summary, read_data, summary_json, CaloriesCalculator};
