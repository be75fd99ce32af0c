//! Configuration validation.
//!
//! # Responsibilities
//! - Reject context keys the transport could not carry as header names
//! - Reject control characters in context values
//! - Check the log level is one `tracing` understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: ConnectorConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::ConnectorConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("writer.context has an empty key")]
    EmptyContextKey,

    #[error("writer.context key {0:?} contains whitespace or control characters")]
    InvalidContextKey(String),

    #[error("writer.context value for {0:?} contains control characters")]
    InvalidContextValue(String),

    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ConnectorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (key, value) in &config.writer.context {
        if key.is_empty() {
            errors.push(ValidationError::EmptyContextKey);
        } else if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            errors.push(ValidationError::InvalidContextKey(key.clone()));
        }
        if value.chars().any(char::is_control) {
            errors.push(ValidationError::InvalidContextValue(key.clone()));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(validate_config(&ConnectorConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ConnectorConfig::default();
        config.writer.context.insert(String::new(), "x".into());
        config.writer.context.insert("Bad Key".into(), "ok".into());
        config.writer.context.insert("X-Trace".into(), "a\nb".into());
        config.observability.log_level = "verbose".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::EmptyContextKey));
        assert!(errors.contains(&ValidationError::InvalidContextKey("Bad Key".into())));
        assert!(errors.contains(&ValidationError::InvalidContextValue("X-Trace".into())));
        assert!(errors.contains(&ValidationError::UnknownLogLevel("verbose".into())));
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = ConnectorConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
