//! Error types for the shift compensation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during classification and
//! compensation calculation.

use thiserror::Error;

/// The main error type for the shift compensation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use ob_engine::error::EngineError;
///
/// let error = EngineError::InvalidInterval {
///     entry_id: "entry_001".to_string(),
///     message: "unparseable start time '25:99'".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid interval for entry 'entry_001': unparseable start time '25:99'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A work interval contained an unparseable date/time or a negative break.
    ///
    /// This error is recoverable at the entry level: the aggregator collects
    /// it and carries on with the remaining entries.
    #[error("Invalid interval for entry '{entry_id}': {message}")]
    InvalidInterval {
        /// The ID of the offending time entry.
        entry_id: String,
        /// A description of what made the interval invalid.
        message: String,
    },

    /// Tenant configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Tenant configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Creates an `InvalidInterval` error for the given entry.
    pub fn invalid_interval(entry_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInterval {
            entry_id: entry_id.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_interval_displays_entry_and_message() {
        let error = EngineError::invalid_interval("entry_007", "unparseable date '2026-13-40'");
        assert_eq!(
            error.to_string(),
            "Invalid interval for entry 'entry_007': unparseable date '2026-13-40'"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/tenant.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/tenant.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_interval() -> EngineResult<()> {
            Err(EngineError::invalid_interval("e1", "bad time"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_interval()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
