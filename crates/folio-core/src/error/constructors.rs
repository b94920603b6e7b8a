//! Constructor methods for FolioError

use super::types::FolioError;

impl FolioError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
            context: None,
        }
    }

    /// Create an invalid input error with field
    pub fn invalid_input_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
            context: None,
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            context: None,
        }
    }

    /// Check whether this error means the process must not serve traffic
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnifiedError;

    #[test]
    fn test_config_error_display() {
        let err = FolioError::config("No provider credentials found");
        assert_eq!(
            err.to_string(),
            "Configuration error: No provider credentials found"
        );
        assert!(err.is_config());
    }

    #[test]
    fn test_config_with_context() {
        let err = FolioError::config_with_context("bad value", "Parsing FOLIO_COOLDOWN_SECS");
        assert_eq!(err.context(), Some("Parsing FOLIO_COOLDOWN_SECS"));
    }

    #[test]
    fn test_invalid_input_field() {
        let err = FolioError::invalid_input_field("Question cannot be empty", "question");
        match err {
            FolioError::InvalidInput { field, .. } => {
                assert_eq!(field.as_deref(), Some("question"))
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
