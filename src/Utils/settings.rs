//! Typed configuration of the solver built from a task_parser document:
//!
//! ```text
//! solver
//!   precision: 4
//! logging
//!   level: info
//!   to_file: false
//! plot
//!   x_min: -10
//!   x_max: 10
//!   points: 400
//!   file: polynomial.png
//! ```
//! Every key is optional, missing ones keep their default.
use crate::Utils::task_parser::{ConfigDocument, ConfigValue, parse_config_document};
use crate::polynomial::reducer::DEFAULT_PRECISION;
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MAX_PRECISION: u32 = 10;
const LOG_LEVELS: [&str; 6] = ["off", "none", "error", "warn", "info", "debug"];

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot parse configuration: {0}")]
    Parse(String),
    #[error("Invalid value of '{key}' in section '{section}': {reason}")]
    InvalidValue {
        section: String,
        key: String,
        reason: String,
    },
}

impl SettingsError {
    fn invalid(section: &str, key: &str, reason: impl Into<String>) -> Self {
        SettingsError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    pub x_min: f64,
    pub x_max: f64,
    pub points: usize,
    pub file: PathBuf,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            x_min: -10.0,
            x_max: 10.0,
            points: 400,
            file: PathBuf::from("polynomial.png"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolverSettings {
    /// decimals of every printed number
    pub precision: u32,
    pub loglevel: String,
    pub log_to_file: bool,
    pub plot: PlotSettings,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            precision: DEFAULT_PRECISION,
            loglevel: "warn".to_string(),
            log_to_file: false,
            plot: PlotSettings::default(),
        }
    }
}

fn template() -> HashMap<String, Vec<String>> {
    let sections: [(&str, &[&str]); 3] = [
        ("solver", &["precision"]),
        ("logging", &["level", "to_file"]),
        ("plot", &["x_min", "x_max", "points", "file"]),
    ];
    sections
        .iter()
        .map(|(title, keys)| {
            (
                title.to_string(),
                keys.iter().map(|k| k.to_string()).collect(),
            )
        })
        .collect()
}

/// first value of `section.key`, None when the key is absent or has no values
fn first_value<'a>(document: &'a ConfigDocument, section: &str, key: &str) -> Option<&'a ConfigValue> {
    document
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|values| values.as_ref())
        .and_then(|values| values.first())
}

fn float_value(document: &ConfigDocument, section: &str, key: &str) -> Result<Option<f64>, SettingsError> {
    match first_value(document, section, key) {
        None => Ok(None),
        Some(value) => value
            .as_float()
            .map(Some)
            .ok_or_else(|| SettingsError::invalid(section, key, format!("'{}' is not a number", value))),
    }
}

fn integer_value(document: &ConfigDocument, section: &str, key: &str) -> Result<Option<i64>, SettingsError> {
    match first_value(document, section, key) {
        None => Ok(None),
        Some(value) => value
            .as_integer()
            .map(Some)
            .ok_or_else(|| SettingsError::invalid(section, key, format!("'{}' is not an integer", value))),
    }
}

impl SolverSettings {
    pub fn from_document(input: &str) -> Result<Self, SettingsError> {
        let document = parse_config_document(input, &template()).map_err(SettingsError::Parse)?;
        let mut settings = SolverSettings::default();

        if let Some(precision) = integer_value(&document, "solver", "precision")? {
            settings.precision = u32::try_from(precision).map_err(|_| {
                SettingsError::invalid("solver", "precision", "must not be negative")
            })?;
        }
        if let Some(level) = first_value(&document, "logging", "level") {
            settings.loglevel = level.to_string().to_lowercase();
        }
        if let Some(to_file) = first_value(&document, "logging", "to_file") {
            settings.log_to_file = to_file.as_boolean().ok_or_else(|| {
                SettingsError::invalid("logging", "to_file", "expected true or false")
            })?;
        }
        if let Some(x_min) = float_value(&document, "plot", "x_min")? {
            settings.plot.x_min = x_min;
        }
        if let Some(x_max) = float_value(&document, "plot", "x_max")? {
            settings.plot.x_max = x_max;
        }
        if let Some(points) = integer_value(&document, "plot", "points")? {
            settings.plot.points = usize::try_from(points)
                .map_err(|_| SettingsError::invalid("plot", "points", "must not be negative"))?;
        }
        if let Some(file) = first_value(&document, "plot", "file") {
            settings.plot.file = PathBuf::from(file.to_string());
        }

        settings.validate()?;
        debug!("settings from document: {:?}", settings);
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        info!("reading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_document(&content)
    }

    /// the command line wins over the configuration document
    pub fn with_loglevel(mut self, loglevel: Option<&str>) -> Result<Self, SettingsError> {
        if let Some(level) = loglevel {
            self.loglevel = level.to_lowercase();
            self.validate()?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.precision > MAX_PRECISION {
            return Err(SettingsError::invalid(
                "solver",
                "precision",
                format!("{} is above {}", self.precision, MAX_PRECISION),
            ));
        }
        if !LOG_LEVELS.contains(&self.loglevel.as_str()) {
            return Err(SettingsError::invalid(
                "logging",
                "level",
                format!("unknown level '{}'", self.loglevel),
            ));
        }
        if !self.plot.x_min.is_finite() || !self.plot.x_max.is_finite() || self.plot.x_min >= self.plot.x_max {
            return Err(SettingsError::invalid(
                "plot",
                "x_min",
                format!("x_min {} must be below x_max {}", self.plot.x_min, self.plot.x_max),
            ));
        }
        if self.plot.points < 2 {
            return Err(SettingsError::invalid("plot", "points", "at least 2 points are needed"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = SolverSettings::default();
        assert_eq!(settings.precision, 4);
        assert_eq!(settings.loglevel, "warn");
        assert!(!settings.log_to_file);
        assert_eq!(settings.plot.points, 400);
        assert_eq!(settings.plot.file, PathBuf::from("polynomial.png"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let input = "solver\n  precision: 2\nplot\n  x_min: -3\n  x_max: 2.5\n";
        let settings = SolverSettings::from_document(input).unwrap();
        assert_eq!(settings.precision, 2);
        assert_eq!(settings.plot.x_min, -3.0);
        assert_eq!(settings.plot.x_max, 2.5);
        assert_eq!(settings.plot.points, 400);
        assert_eq!(settings.loglevel, "warn");
    }

    #[test]
    fn test_full_document_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "# solver configuration\nsolver\n  precision: 6\nlogging\n  level: DEBUG\n  to_file: true\nplot\n  x_min: -1\n  x_max: 1\n  points: 50\n  file: roots.png"
        )
        .unwrap();
        let settings = SolverSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.precision, 6);
        assert_eq!(settings.loglevel, "debug");
        assert!(settings.log_to_file);
        assert_eq!(
            settings.plot,
            PlotSettings {
                x_min: -1.0,
                x_max: 1.0,
                points: 50,
                file: PathBuf::from("roots.png"),
            }
        );
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            "solver precision: 11",
            "solver precision: -1",
            "solver precision: 2.5",
            "logging level: loud",
            "logging to_file: maybe",
            "plot x_min: 3 x_max: 3",
            "plot points: 1",
            "plot x_max: wide",
        ];
        for input in cases {
            let result = SolverSettings::from_document(input);
            assert!(
                matches!(result, Err(SettingsError::InvalidValue { .. })),
                "{} gave {:?}",
                input,
                result
            );
        }
    }

    #[test]
    fn test_parse_and_io_errors() {
        assert!(matches!(
            SolverSettings::from_document("solver precision 4"),
            Err(SettingsError::Parse(_))
        ));
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SolverSettings::from_file(dir.path().join("missing.cfg")),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_loglevel_override() {
        let settings = SolverSettings::default()
            .with_loglevel(Some("Info"))
            .unwrap();
        assert_eq!(settings.loglevel, "info");
        let settings = settings.with_loglevel(None).unwrap();
        assert_eq!(settings.loglevel, "info");
        assert!(SolverSettings::default().with_loglevel(Some("verbose")).is_err());
    }
}
