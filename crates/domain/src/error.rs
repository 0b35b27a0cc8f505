use strum::Display;

use crate::WorkoutType;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("unknown workout type \"{0}\"")]
    UnknownWorkoutType(String),
    #[error("{workout_type} expects {expected} fields, got {actual}")]
    ArityMismatch {
        workout_type: WorkoutType,
        expected: usize,
        actual: usize,
    },
    #[error(transparent)]
    InvalidInput(#[from] InputError),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("{0} must be a finite number")]
    NotFinite(Field),
    #[error("{0} must be positive")]
    NotPositive(Field),
    #[error("{0} must be a non-negative whole number")]
    InvalidCount(Field),
    #[error("Speed and calories must be finite numbers")]
    NonFiniteMetrics,
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    #[strum(to_string = "Action count")]
    Action,
    #[strum(to_string = "Duration")]
    Duration,
    #[strum(to_string = "Weight")]
    Weight,
    #[strum(to_string = "Height")]
    Height,
    #[strum(to_string = "Pool length")]
    PoolLength,
    #[strum(to_string = "Pool count")]
    PoolCount,
}

pub(crate) fn positive(field: Field, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite(field));
    }

    if value <= 0.0 {
        return Err(InputError::NotPositive(field));
    }

    Ok(value)
}

pub(crate) fn count(field: Field, value: f64) -> Result<u32, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite(field));
    }

    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(InputError::InvalidCount(field));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(value as u32)
}
