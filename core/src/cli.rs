use std::io::Write;

use chrono::Duration;
use log::{info, warn};

use crate::constants::{LEN_STEP_M, SWIM_STROKE_M};
use crate::models::{Running, Session, Swimming, Walking, Workout};
use crate::report::read_data;

/// The hardcoded demo sessions, in print order.
pub fn sample_workouts() -> Vec<Workout> {
    let swimming = Swimming {
        base: Session::new("Swimming", 2000, SWIM_STROKE_M, Duration::minutes(90), 85.0),
        pool_length_m: 50,
        lap_count: 5,
    };

    let walking = Walking {
        base: Session::new(
            "Walking",
            20000,
            LEN_STEP_M,
            Duration::hours(3) + Duration::minutes(45),
            85.0,
        ),
        height_cm: 185.0,
    };

    let running = Running {
        base: Session::new("Running", 5000, LEN_STEP_M, Duration::minutes(30), 85.0),
    };

    vec![swimming.into(), walking.into(), running.into()]
}

/// Writes one report per workout, each followed by an empty line.
pub fn print_reports<W: Write>(workouts: &[Workout], out: &mut W) -> std::io::Result<()> {
    for w in workouts {
        if let Err(e) = w.validate() {
            warn!("[report] {}: {e}", w.session().training_type);
        }
        writeln!(out, "{}", read_data(w))?;
        info!("[report] printed {}", w.session().training_type);
    }
    out.flush()
}
