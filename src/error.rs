// src/error.rs
// Error types for startup, configuration and seed loading

use thiserror::Error;

/// Main error type for the pattern-radar library.
///
/// The store itself never fails; these cover everything around it.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Result using PatternError
pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let err = PatternError::InvalidInput("id is required".to_string());
        assert!(err.to_string().contains("invalid input"));
        assert!(err.to_string().contains("id is required"));
    }

    #[test]
    fn test_config_error() {
        let err = PatternError::Config("unknown sample data set".to_string());
        assert!(err.to_string().contains("configuration error"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PatternError = io_err.into();
        assert!(matches!(err, PatternError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: PatternError = json_err.into();
        assert!(matches!(err, PatternError::Json(_)));
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("port = ").unwrap_err();
        let err: PatternError = toml_err.into();
        assert!(matches!(err, PatternError::Toml(_)));
    }
}
