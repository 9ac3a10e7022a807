use thiserror::Error;

/// Top-level error type for the mySAM system.
///
/// Subsystem crates define their own error types and implement
/// `From<SubsystemError> for MySamError` so that the `?` operator works
/// across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MySamError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Voice error: {0}")]
    Voice(String),

    #[error("Invalid rating: {0} (expected 1 to 5)")]
    InvalidRating(u8),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for MySamError {
    fn from(err: toml::de::Error) -> Self {
        MySamError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for MySamError {
    fn from(err: toml::ser::Error) -> Self {
        MySamError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for MySamError {
    fn from(err: serde_json::Error) -> Self {
        MySamError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for mySAM operations.
pub type Result<T> = std::result::Result<T, MySamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MySamError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = MySamError::InvalidRating(7);
        assert_eq!(err.to_string(), "Invalid rating: 7 (expected 1 to 5)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MySamError = io_err.into();
        assert!(matches!(err, MySamError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let parsed: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        let err: MySamError = parsed.unwrap_err().into();
        assert!(matches!(err, MySamError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let bad_json = "{ invalid json }";
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str(bad_json);
        let err: MySamError = parsed.unwrap_err().into();
        assert!(matches!(err, MySamError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let _value = io_result?;
            Ok("success".to_string())
        }

        assert_eq!(inner().unwrap(), "success");
    }
}
