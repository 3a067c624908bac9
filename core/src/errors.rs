use thiserror::Error;

use crate::models::{Session, Workout};

/// Rejected session input. Zero duration is accepted; the calculations
/// guard it themselves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("weight must be positive, got {0} kg")]
    NonPositiveWeight(f64),
    #[error("step length must be positive, got {0} m")]
    NonPositiveStepLength(f64),
    #[error("duration must not be negative, got {0} ms")]
    NegativeDuration(i64),
    #[error("height must be positive, got {0} cm")]
    NonPositiveHeight(f64),
    #[error("pool length and lap count must be positive (pool={pool_length_m} m, laps={lap_count})")]
    EmptyPool { pool_length_m: u32, lap_count: u32 },
}

fn validate_session(s: &Session) -> Result<(), SessionError> {
    if !(s.weight_kg > 0.0) {
        return Err(SessionError::NonPositiveWeight(s.weight_kg));
    }
    if !(s.len_step_m > 0.0) {
        return Err(SessionError::NonPositiveStepLength(s.len_step_m));
    }
    if s.duration < chrono::Duration::zero() {
        return Err(SessionError::NegativeDuration(s.duration.num_milliseconds()));
    }
    Ok(())
}

impl Workout {
    /// Opt-in input check. The calculations never call this.
    pub fn validate(&self) -> Result<(), SessionError> {
        validate_session(self.session())?;
        match self {
            Workout::Running(_) => Ok(()),
            Workout::Walking(w) if !(w.height_cm > 0.0) => {
                Err(SessionError::NonPositiveHeight(w.height_cm))
            }
            Workout::Walking(_) => Ok(()),
            Workout::Swimming(s) if s.pool_length_m == 0 || s.lap_count == 0 => {
                Err(SessionError::EmptyPool {
                    pool_length_m: s.pool_length_m,
                    lap_count: s.lap_count,
                })
            }
            Workout::Swimming(_) => Ok(()),
        }
    }
}
