//! Core error types for oneonone-core.
//!
//! The recommendation engine itself never fails: an empty calendar is a
//! value, not an error. Everything around it (drafts, finalization, config,
//! the backend) reports through the enums below.

use chrono::{NaiveDate, NaiveTime};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for oneonone-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Several validation errors at once
    #[error("Validation failed: {0}")]
    Invalid(#[from] ValidationErrors),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// End not after start
    #[error("End time ({end}) must be after start time ({start})")]
    InvalidTimeRange { start: NaiveTime, end: NaiveTime },

    /// Finalization date too far in the past
    #[error("Date {date} is before the earliest allowed date {earliest}")]
    DateInPast { date: NaiveDate, earliest: NaiveDate },

    /// Required text left blank
    #[error("'{0}' must not be empty")]
    EmptyField(&'static str),

    /// Calendar without candidate days
    #[error("A calendar needs at least one day")]
    NoDays,

    /// Ranking not strictly positive
    #[error("Ranking must be > 0, got {0}")]
    NonPositiveRanking(i32),

    #[error("Duplicate dates")]
    DuplicateDate(NaiveDate),

    #[error("Duplicate rankings")]
    DuplicateRanking(i32),
}

/// Every issue found in one form, each tied to a day index when it concerns
/// a single day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<(Option<usize>, ValidationError)>);

impl ValidationErrors {
    pub fn push(&mut self, day: Option<usize>, error: ValidationError) {
        self.0.push((day, error));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Issues attached to one day.
    pub fn for_day(&self, index: usize) -> impl Iterator<Item = &ValidationError> {
        self.0
            .iter()
            .filter(move |(day, _)| *day == Some(index))
            .map(|(_, e)| e)
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (day, error)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            match day {
                Some(index) => write!(f, "days.{index}: {error}")?,
                None => write!(f, "{error}")?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown dotted key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home/config directory could not be prepared
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Backend API errors.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Base URL could not be parsed or joined
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Transport failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Access token rejected
    #[error("Not authenticated: the access token was rejected")]
    Unauthorized,

    /// Any other non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_display_with_day_paths() {
        let mut errors = ValidationErrors::default();
        errors.push(None, ValidationError::EmptyField("title"));
        errors.push(Some(2), ValidationError::DuplicateRanking(3));
        assert_eq!(
            errors.to_string(),
            "'title' must not be empty; days.2: Duplicate rankings"
        );
        assert_eq!(errors.for_day(2).count(), 1);
        assert_eq!(errors.for_day(0).count(), 0);
    }

    #[test]
    fn empty_errors_are_ok() {
        assert!(ValidationErrors::default().into_result().is_ok());
    }
}
