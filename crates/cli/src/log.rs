use std::{
    fmt,
    io::{self, Write},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let time = Local::now().format("%b %d %H:%M:%S").to_string();
            let _ = writeln!(
                io::stderr().lock(),
                "{}",
                entry(&time, record.level(), record.args())
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn entry(time: &str, level: Level, message: &fmt::Arguments) -> String {
    format!("{time} {level:<5} {message}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_entry() {
        assert_eq!(
            entry("Oct 18 09:15:00", Level::Warn, &format_args!("failed to read {}", "XYZ")),
            "Oct 18 09:15:00 WARN  failed to read XYZ"
        );
        assert_eq!(
            entry("Oct 18 09:15:00", Level::Error, &format_args!("boom")),
            "Oct 18 09:15:00 ERROR boom"
        );
    }

    #[test]
    fn test_init() {
        assert!(init(LevelFilter::Debug).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(init(LevelFilter::Info).is_err());
    }
}
