//! Timeout configuration for provider calls

use crate::error::{FolioError, FolioResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default timeout values for LLM operations
pub mod llm {
    use super::*;

    /// Default connection timeout for LLM APIs (30 seconds)
    pub const CONNECTION_SECS: u64 = 30;

    /// Default request timeout for LLM APIs (60 seconds)
    pub const REQUEST_SECS: u64 = 60;

    /// Get connection timeout as Duration
    pub fn connection_timeout() -> Duration {
        Duration::from_secs(CONNECTION_SECS)
    }

    /// Get request timeout as Duration
    pub fn request_timeout() -> Duration {
        Duration::from_secs(REQUEST_SECS)
    }
}

/// HTTP client timeouts applied to every provider adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    pub connect_secs: u64,
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: llm::CONNECTION_SECS,
            request_secs: llm::REQUEST_SECS,
        }
    }
}

impl TimeoutConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    pub fn validate(&self) -> FolioResult<()> {
        if self.connect_secs == 0 || self.request_secs == 0 {
            return Err(FolioError::config("Timeouts must be greater than zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_timeouts() {
        assert_eq!(llm::connection_timeout(), Duration::from_secs(30));
        assert_eq!(llm::request_timeout(), Duration::from_secs(60));
        assert_eq!(TimeoutConfig::default().request_timeout(), llm::request_timeout());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = TimeoutConfig {
            connect_secs: 0,
            request_secs: 10,
        };
        assert!(config.validate().is_err());
    }
}
