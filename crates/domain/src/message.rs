use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::WorkoutType;

#[derive(
    Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    #[default]
    #[serde(rename = "ru")]
    #[strum(serialize = "ru")]
    Russian,
    #[serde(rename = "en")]
    #[strum(serialize = "en")]
    English,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let code: &'static str = self.into();
        f.write_str(code)
    }
}

struct Labels {
    workout_type: &'static str,
    duration: &'static str,
    distance: &'static str,
    speed: &'static str,
    calories: &'static str,
    hours: &'static str,
    km: &'static str,
    km_per_hour: &'static str,
}

const RUSSIAN: Labels = Labels {
    workout_type: "Тип тренировки",
    duration: "Длительность",
    distance: "Дистанция",
    speed: "Ср. скорость",
    calories: "Потрачено ккал",
    hours: "ч.",
    km: "км",
    km_per_hour: "км/ч",
};

const ENGLISH: Labels = Labels {
    workout_type: "Training type",
    duration: "Duration",
    distance: "Distance",
    speed: "Avg speed",
    calories: "Calories burned",
    hours: "h.",
    km: "km",
    km_per_hour: "km/h",
};

impl Locale {
    fn labels(self) -> &'static Labels {
        match self {
            Locale::Russian => &RUSSIAN,
            Locale::English => &ENGLISH,
        }
    }
}

/// Results of a completed workout, ready to be presented to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub workout_type: WorkoutType,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    #[must_use]
    pub fn message(&self, locale: Locale) -> String {
        let l = locale.labels();
        format!(
            "{}: {}; {}: {:.3} {}; {}: {:.3} {}; {}: {:.3} {}; {}: {:.3}.",
            l.workout_type,
            self.workout_type,
            l.duration,
            self.duration,
            l.hours,
            l.distance,
            self.distance,
            l.km,
            l.speed,
            self.speed,
            l.km_per_hour,
            l.calories,
            self.calories,
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message(Locale::default()))
    }
}
