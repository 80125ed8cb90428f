use thiserror::Error;

/// Top-level error type for the findex system.
///
/// Subsystems wrap their failures into a variant here so the `?` operator
/// works across crate boundaries without intermediate error types.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FindexError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Malformed input row {row}: expected at least 3 fields, got {fields}")]
    MalformedInput { row: usize, fields: usize },

    #[error("Invalid size format: {0}")]
    InvalidFormat(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for FindexError {
    fn from(err: toml::de::Error) -> Self {
        FindexError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for FindexError {
    fn from(err: toml::ser::Error) -> Self {
        FindexError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for FindexError {
    fn from(err: serde_json::Error) -> Self {
        FindexError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for findex operations.
pub type Result<T> = std::result::Result<T, FindexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FindexError::Storage("disk full".to_string());
        assert_eq!(err.to_string(), "Storage error: disk full");
    }

    #[test]
    fn test_malformed_input_display() {
        let err = FindexError::MalformedInput { row: 7, fields: 2 };
        assert_eq!(
            err.to_string(),
            "Malformed input row 7: expected at least 3 fields, got 2"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FindexError = io_err.into();
        assert!(matches!(err, FindexError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let parsed: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        let err: FindexError = parsed.unwrap_err().into();
        assert!(matches!(err, FindexError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let parsed: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("{ not json }");
        let err: FindexError = parsed.unwrap_err().into();
        assert!(matches!(err, FindexError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<i32> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            Ok(io_result?)
        }

        assert_eq!(inner().unwrap(), 42);
    }
}
