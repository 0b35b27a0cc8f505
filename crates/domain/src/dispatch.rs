use std::str::FromStr;

use log::{debug, warn};

use crate::{BuildError, Workout, WorkoutType};

/// Raw data of a workout as reported by a sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    #[must_use]
    pub fn new(workout_type: &str, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            data: data.to_vec(),
        }
    }

    pub fn read(&self) -> Result<Workout, BuildError> {
        build(&self.workout_type, &self.data)
    }
}

/// Select the workout type by its sensor tag and build the workout from the
/// positional fields.
///
/// | tag   | fields                                                   |
/// |-------|----------------------------------------------------------|
/// | `RUN` | action, duration, weight                                 |
/// | `WLK` | action, duration, weight, height                         |
/// | `SWM` | action, duration, weight, pool length, pool count        |
pub fn build(tag: &str, fields: &[f64]) -> Result<Workout, BuildError> {
    let result = validate(tag, fields);
    match result {
        Ok(ref workout) => debug!("read {tag} package: {workout:?}"),
        Err(ref err) => warn!("failed to read {tag} package: {err}"),
    }
    result
}

fn validate(tag: &str, fields: &[f64]) -> Result<Workout, BuildError> {
    let workout_type = WorkoutType::from_str(tag)
        .map_err(|_| BuildError::UnknownWorkoutType(tag.to_string()))?;

    if fields.len() != workout_type.arity() {
        return Err(BuildError::ArityMismatch {
            workout_type,
            expected: workout_type.arity(),
            actual: fields.len(),
        });
    }

    Ok(Workout::from_fields(workout_type, fields)?)
}
