//! From trait implementations for FolioError conversions

use super::types::FolioError;

impl From<anyhow::Error> for FolioError {
    fn from(error: anyhow::Error) -> Self {
        Self::other(error.to_string())
    }
}

impl From<std::io::Error> for FolioError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<reqwest::Error> for FolioError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: error.to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            context: None,
        }
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(error: toml::de::Error) -> Self {
        Self::config(format!("Failed to parse TOML: {}", error))
    }
}

impl From<serde_yaml::Error> for FolioError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::config(format!("Failed to parse YAML: {}", error))
    }
}

impl From<crate::llm::AskError> for FolioError {
    fn from(error: crate::llm::AskError) -> Self {
        Self::Llm {
            message: error.to_string(),
            provider: Some(error.provider().name.clone()),
            context: Some(format!("failure kind: {}", error.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnifiedError;
    use crate::llm::{AdapterError, AskError, ProviderDescriptor, Vendor};

    #[test]
    fn test_from_ask_error_keeps_provider() {
        let ask = AskError::ChainExhausted {
            provider: ProviderDescriptor::new(
                "gemini-fallback",
                "gemini-1.5-flash",
                Vendor::Gemini,
            ),
            error: AdapterError::with_status("quota", 429),
        };
        let err = FolioError::from(ask);
        assert_eq!(err.error_code(), "FOLIO_LLM");
        assert_eq!(err.context(), Some("failure kind: capacity"));
        match err {
            FolioError::Llm { provider, .. } => {
                assert_eq!(provider.as_deref(), Some("gemini-fallback"))
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(FolioError::from(io).error_code(), "FOLIO_IO");
    }
}
