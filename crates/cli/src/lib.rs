#![warn(clippy::pedantic)]

use std::io::Write;

use anyhow::Context;
use fittrack_domain::{Locale, Package};

pub mod log;
pub mod settings;

#[must_use]
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Print the summary of each package, one per line.
///
/// # Errors
///
/// Stops at the first package that cannot be read or the first failed write.
pub fn run(packages: &[Package], locale: Locale, out: &mut impl Write) -> anyhow::Result<()> {
    for package in packages {
        let workout = package
            .read()
            .with_context(|| format!("failed to read {} package", package.workout_type))?;
        writeln!(out, "{}", workout.summary_in(locale))?;
    }
    ::log::debug!("printed {} summaries", packages.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_run_samples() {
        let mut out = Vec::new();
        run(&sample_packages(), Locale::Russian, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.\n\
             Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.\n\
             Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
             Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.\n"
        );
    }

    #[test]
    fn test_run_english() {
        let mut out = Vec::new();
        run(
            &[Package::new("RUN", &[15000.0, 1.0, 75.0])],
            Locale::English,
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 699.750.\n"
        );
    }

    #[test]
    fn test_run_stops_at_invalid_package() {
        let mut out = Vec::new();
        let err = run(
            &[
                Package::new("RUN", &[15000.0, 1.0, 75.0]),
                Package::new("XYZ", &[1.0, 1.0, 1.0]),
                Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
            ],
            Locale::English,
            &mut out,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "failed to read XYZ package");
        assert_eq!(
            format!("{err:#}"),
            "failed to read XYZ package: unknown workout type \"XYZ\""
        );
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
