use crate::Utils::settings::{SettingsError, SolverSettings};
use chrono::Local;
use log::{LevelFilter, info};
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::PathBuf;

pub fn level_filter(level: &str) -> Result<LevelFilter, SettingsError> {
    match level.to_lowercase().as_str() {
        "off" | "none" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        other => Err(SettingsError::InvalidValue {
            section: "logging".to_string(),
            key: "level".to_string(),
            reason: format!("loglevel must be off, error, warn, info or debug, got '{}'", other),
        }),
    }
}

/// log_2025-01-31_12-00-00.txt
pub fn log_file_name() -> PathBuf {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    PathBuf::from(format!("log_{}.txt", date_and_time))
}

/// Terminal logger on stderr plus an optional file logger. Returns the log file when one
/// was created. A logger installed earlier in the process stays in place.
pub fn init_logger(settings: &SolverSettings) -> Result<Option<PathBuf>, SettingsError> {
    let level = level_filter(&settings.loglevel)?;
    if level == LevelFilter::Off {
        return Ok(None);
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let mut log_file = None;
    if settings.log_to_file {
        let name = log_file_name();
        let file = File::create(&name)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
        log_file = Some(name);
    }

    if CombinedLogger::init(loggers).is_ok() {
        info!("logger initialized with level {}", level);
    }
    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("off").unwrap(), LevelFilter::Off);
        assert_eq!(level_filter("none").unwrap(), LevelFilter::Off);
        assert_eq!(level_filter("Error").unwrap(), LevelFilter::Error);
        assert_eq!(level_filter("warn").unwrap(), LevelFilter::Warn);
        assert_eq!(level_filter("INFO").unwrap(), LevelFilter::Info);
        assert_eq!(level_filter("debug").unwrap(), LevelFilter::Debug);
        assert!(level_filter("trace!").is_err());
    }

    #[test]
    fn test_log_file_name() {
        let name = log_file_name();
        let name = name.to_string_lossy();
        assert!(name.starts_with("log_"));
        assert!(name.ends_with(".txt"));
        // log_YYYY-MM-DD_HH-MM-SS.txt
        assert_eq!(name.len(), "log_".len() + 19 + ".txt".len());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let settings = SolverSettings::default();
        assert_eq!(init_logger(&settings).unwrap(), None);
        assert_eq!(init_logger(&settings).unwrap(), None);
        let off = SolverSettings {
            loglevel: "off".to_string(),
            ..SolverSettings::default()
        };
        assert_eq!(init_logger(&off).unwrap(), None);
    }
}
