use std::{env, fs, path::Path, str::FromStr};

use fittrack_domain::Locale;
use log::LevelFilter;

/// Path of an optional JSON settings file.
pub const SETTINGS_VAR: &str = "FITTRACK_SETTINGS";
pub const LOCALE_VAR: &str = "FITTRACK_LOCALE";
pub const LOG_VAR: &str = "FITTRACK_LOG";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::Russian,
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {var}: \"{value}\"")]
    InvalidVar { var: &'static str, value: String },
}

impl Settings {
    /// Load the settings file named by `FITTRACK_SETTINGS` and apply the
    /// overrides of `FITTRACK_LOCALE` and `FITTRACK_LOG`.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(|var| env::var(var).ok())
    }

    pub fn load_from(var: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let mut settings = match var(SETTINGS_VAR) {
            Some(path) => Self::read(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(value) = var(LOCALE_VAR) {
            settings.locale =
                Locale::from_str(value.trim()).map_err(|_| SettingsError::InvalidVar {
                    var: LOCALE_VAR,
                    value,
                })?;
        }

        if let Some(value) = var(LOG_VAR) {
            settings.log_level =
                LevelFilter::from_str(value.trim()).map_err(|_| SettingsError::InvalidVar {
                    var: LOG_VAR,
                    value,
                })?;
        }

        Ok(settings)
    }

    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("{}", Settings::default())]
    #[case(
        r#"{"locale": "en"}"#,
        Settings { locale: Locale::English, log_level: LevelFilter::Info }
    )]
    #[case(
        r#"{"locale": "ru", "log_level": "debug"}"#,
        Settings { locale: Locale::Russian, log_level: LevelFilter::Debug }
    )]
    fn test_settings_parse(#[case] content: &str, #[case] expected: Settings) {
        assert_eq!(Settings::parse(content).unwrap(), expected);
    }

    #[rstest]
    #[case(r#"{"locale": "de"}"#)]
    #[case(r#"{"log_level": "loud"}"#)]
    #[case("[")]
    fn test_settings_parse_invalid(#[case] content: &str) {
        assert!(matches!(
            Settings::parse(content),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_settings_load_from_defaults() {
        assert_eq!(Settings::load_from(|_| None).unwrap(), Settings::default());
    }

    #[test]
    fn test_settings_load_from_overrides() {
        let vars = HashMap::from([(LOCALE_VAR, "EN"), (LOG_VAR, " warn ")]);
        assert_eq!(
            Settings::load_from(|var| vars.get(var).map(ToString::to_string)).unwrap(),
            Settings {
                locale: Locale::English,
                log_level: LevelFilter::Warn
            }
        );
    }

    #[rstest]
    #[case(LOCALE_VAR, "fr")]
    #[case(LOG_VAR, "verbose")]
    fn test_settings_load_from_invalid_var(#[case] name: &'static str, #[case] value: &str) {
        let result = Settings::load_from(|var| (var == name).then(|| value.to_string()));
        assert!(matches!(
            result,
            Err(SettingsError::InvalidVar { var, value: ref v }) if var == name && v == value
        ));
    }

    #[test]
    fn test_settings_load_from_file() {
        let path = env::temp_dir().join(format!("fittrack-settings-{}.json", std::process::id()));
        fs::write(&path, r#"{"locale": "en", "log_level": "error"}"#).unwrap();
        let file = path.display().to_string();

        let settings = Settings::load_from(|var| match var {
            SETTINGS_VAR => Some(file.clone()),
            LOG_VAR => Some("trace".to_string()),
            _ => None,
        });
        fs::remove_file(&path).unwrap();

        assert_eq!(
            settings.unwrap(),
            Settings {
                locale: Locale::English,
                log_level: LevelFilter::Trace
            }
        );
    }

    #[test]
    fn test_settings_read_missing_file() {
        assert!(matches!(
            Settings::read(Path::new("/nonexistent/fittrack.json")),
            Err(SettingsError::Io { .. })
        ));
    }
}
