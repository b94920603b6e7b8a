//! UnifiedError trait implementation for FolioError

use super::types::{FolioError, UnifiedError};

impl UnifiedError for FolioError {
    fn error_code(&self) -> &str {
        match self {
            Self::Config { .. } => "FOLIO_CONFIG",
            Self::Llm { .. } => "FOLIO_LLM",
            Self::Http { .. } => "FOLIO_HTTP",
            Self::Io { .. } => "FOLIO_IO",
            Self::Json { .. } => "FOLIO_JSON",
            Self::InvalidInput { .. } => "FOLIO_INVALID_INPUT",
            Self::Other { .. } => "FOLIO_OTHER",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Config { message, .. }
            | Self::Llm { message, .. }
            | Self::Http { message, .. }
            | Self::Io { message, .. }
            | Self::Json { message, .. }
            | Self::InvalidInput { message, .. }
            | Self::Other { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. }
            | Self::Llm { context, .. }
            | Self::Http { context, .. }
            | Self::Io { context, .. }
            | Self::Json { context, .. }
            | Self::InvalidInput { context, .. }
            | Self::Other { context, .. } => context.as_deref(),
        }
    }
}
