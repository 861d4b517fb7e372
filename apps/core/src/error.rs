use std::io;
use thiserror::Error;

/// Crate-wide error type, consolidating every failure the extraction pipeline can report.
///
/// Degenerate input (empty text, punctuation-only text, an absent frequency table) is never
/// an error: metrics resolve those cases to their zero sentinel instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors (story folders, CSV tables, report output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents a frequency table that could not be read or lacks a required column.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Represents a failure of the part-of-speech tagging capability.
    #[error("Tagging error: {0}")]
    Tagging(String),

    /// Represents data validation errors (e.g., malformed JSON records).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparsable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Corpus(s) => AppError::Corpus(s.clone()),
            AppError::Tagging(s) => AppError::Tagging(s.clone()),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Corpus(format!("CSV error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_preserves_variant_and_message() {
        let err = AppError::Tagging("length mismatch".to_string());
        let cloned = err.clone();
        assert!(matches!(cloned, AppError::Tagging(_)));
        assert_eq!(cloned.to_string(), "Tagging error: length mismatch");
    }

    #[test]
    fn test_io_error_clone_keeps_kind() {
        let err = AppError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        match err.clone() {
            AppError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_every_variant_clones_to_itself() {
        let errors = vec![
            AppError::Io(io::Error::new(io::ErrorKind::Other, "disk")),
            AppError::Corpus("no Word column".to_string()),
            AppError::Tagging("length mismatch".to_string()),
            AppError::Validation("bad record".to_string()),
            AppError::Config("bad capacity".to_string()),
        ];
        for err in errors {
            let cloned = err.clone();
            assert_eq!(std::mem::discriminant(&cloned), std::mem::discriminant(&err));
            assert_eq!(cloned.to_string(), err.to_string());
        }
    }

    #[test]
    fn test_json_error_maps_to_validation() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
