use derive_more::Display;
use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::{
    Field, InfoMessage, InputError, Locale,
    error::{count, positive},
};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr,
)]
pub enum WorkoutType {
    #[display("Running")]
    #[strum(serialize = "RUN")]
    Running,
    #[display("SportsWalking")]
    #[strum(serialize = "WLK")]
    Walking,
    #[display("Swimming")]
    #[strum(serialize = "SWM")]
    Swimming,
}

impl WorkoutType {
    /// Tag used by the sensor to identify the workout type.
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Number of positional fields a sensor package of this type carries.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::Walking => 4,
            WorkoutType::Swimming => 5,
        }
    }

    /// Distance covered by one step or stroke in m.
    #[must_use]
    pub const fn step_length(self) -> f64 {
        match self {
            WorkoutType::Running | WorkoutType::Walking => 0.65,
            WorkoutType::Swimming => 1.38,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    Running,
    Walking { height: f64 },
    Swimming { pool_length: f64, pool_count: f64 },
}

impl Kind {
    #[must_use]
    pub fn workout_type(self) -> WorkoutType {
        match self {
            Kind::Running => WorkoutType::Running,
            Kind::Walking { .. } => WorkoutType::Walking,
            Kind::Swimming { .. } => WorkoutType::Swimming,
        }
    }
}

/// A completed workout session.
///
/// All fields are validated on construction. Distance, speed and calories are
/// derived from the stored fields on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    action: u32,
    duration: f64,
    weight: f64,
    kind: Kind,
}

impl Workout {
    pub fn running(action: u32, duration: f64, weight: f64) -> Result<Self, InputError> {
        Self::new(action, duration, weight, Kind::Running)
    }

    pub fn walking(
        action: u32,
        duration: f64,
        weight: f64,
        height: f64,
    ) -> Result<Self, InputError> {
        Self::new(action, duration, weight, Kind::Walking { height })
    }

    pub fn swimming(
        action: u32,
        duration: f64,
        weight: f64,
        pool_length: f64,
        pool_count: f64,
    ) -> Result<Self, InputError> {
        Self::new(
            action,
            duration,
            weight,
            Kind::Swimming {
                pool_length,
                pool_count,
            },
        )
    }

    pub fn new(action: u32, duration: f64, weight: f64, kind: Kind) -> Result<Self, InputError> {
        let duration = positive(Field::Duration, duration)?;
        let weight = positive(Field::Weight, weight)?;
        let kind = match kind {
            Kind::Running => Kind::Running,
            Kind::Walking { height } => Kind::Walking {
                height: positive(Field::Height, height)?,
            },
            Kind::Swimming {
                pool_length,
                pool_count,
            } => Kind::Swimming {
                pool_length: positive(Field::PoolLength, pool_length)?,
                pool_count: positive(Field::PoolCount, pool_count)?,
            },
        };

        let workout = Self {
            action,
            duration,
            weight,
            kind,
        };

        if !(workout.mean_speed().is_finite() && workout.spent_calories().is_finite()) {
            return Err(InputError::NonFiniteMetrics);
        }

        Ok(workout)
    }

    /// Build a workout from the positional fields of a sensor package.
    ///
    /// The number of fields must already match the arity of `workout_type`.
    pub(crate) fn from_fields(
        workout_type: WorkoutType,
        fields: &[f64],
    ) -> Result<Self, InputError> {
        debug_assert_eq!(fields.len(), workout_type.arity());

        let action = count(Field::Action, fields[0])?;
        let kind = match workout_type {
            WorkoutType::Running => Kind::Running,
            WorkoutType::Walking => Kind::Walking { height: fields[3] },
            WorkoutType::Swimming => Kind::Swimming {
                pool_length: fields[3],
                pool_count: fields[4],
            },
        };

        Self::new(action, fields[1], fields[2], kind)
    }

    #[must_use]
    pub fn action(&self) -> u32 {
        self.action
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn workout_type(&self) -> WorkoutType {
        self.kind.workout_type()
    }

    /// Distance in km.
    #[must_use]
    pub fn distance(&self) -> f64 {
        f64::from(self.action) * self.workout_type().step_length() / M_IN_KM
    }

    /// Mean speed in km/h.
    #[must_use]
    pub fn mean_speed(&self) -> f64 {
        match self.kind {
            Kind::Running | Kind::Walking { .. } => self.distance() / self.duration,
            Kind::Swimming {
                pool_length,
                pool_count,
            } => pool_length * pool_count / M_IN_KM / self.duration,
        }
    }

    /// Calories burned in kcal.
    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        let speed = self.mean_speed();
        let minutes = self.duration * MIN_IN_H;
        match self.kind {
            Kind::Running => {
                (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * self.weight / M_IN_KM * minutes
            }
            Kind::Walking { height } => {
                (WLK_WEIGHT_MULTIPLIER * self.weight
                    + floor_div(speed.powi(2), height) * WLK_HEIGHT_MULTIPLIER * height)
                    * minutes
            }
            Kind::Swimming { .. } => (speed + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * self.weight,
        }
    }

    #[must_use]
    pub fn info(&self) -> InfoMessage {
        InfoMessage {
            workout_type: self.workout_type(),
            duration: self.duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> String {
        self.summary_in(Locale::default())
    }

    #[must_use]
    pub fn summary_in(&self, locale: Locale) -> String {
        self.info().message(locale)
    }
}

/// Floor of the exact quotient `a / b`, derived from the remainder so that a
/// quotient just below a whole number is not rounded up before flooring.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;

    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}
