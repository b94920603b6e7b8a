//! Configuration data models

use crate::error::{FolioError, FolioResult};
use crate::llm::provider_types::{ProviderDescriptor, Vendor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::time::Duration;

use super::logging_config::LoggingConfig;
use super::timeouts::TimeoutConfig;

/// Name of the primary chain entry
pub const PRIMARY_ENTRY: &str = "groq-primary";
/// Name of the secondary Groq chain entry
pub const SECONDARY_ENTRY: &str = "groq-secondary";
/// Name of the Gemini chain entry
pub const GEMINI_ENTRY: &str = "gemini-fallback";

/// Default primary model
pub const DEFAULT_PRIMARY_MODEL: &str = "gemma2-9b-it";
/// Default secondary Groq model
pub const DEFAULT_SECONDARY_MODEL: &str = "compound-beta-mini";
/// Default Gemini model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Default cooldown before reverting to the primary provider (30 minutes)
pub const DEFAULT_COOLDOWN_SECS: u64 = 1800;

/// Default bind address for the HTTP API
pub const DEFAULT_BIND: &str = "0.0.0.0:7860";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FolioConfig {
    /// Per-vendor credentials and generation parameters
    pub providers: ProvidersConfig,
    /// Fallback chain and cooldown
    pub failover: FailoverConfig,
    /// HTTP server settings
    pub server: ServerConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// HTTP client timeouts for provider calls
    pub timeouts: TimeoutConfig,
}

/// Credentials and parameters for every vendor
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProvidersConfig {
    pub groq: VendorConfig,
    pub gemini: VendorConfig,
}

impl ProvidersConfig {
    /// Get the configuration for a vendor
    pub fn for_vendor(&self, vendor: Vendor) -> &VendorConfig {
        match vendor {
            Vendor::Groq => &self.groq,
            Vendor::Gemini => &self.gemini,
        }
    }

    /// Get the mutable configuration for a vendor
    pub fn for_vendor_mut(&mut self, vendor: Vendor) -> &mut VendorConfig {
        match vendor {
            Vendor::Groq => &mut self.groq,
            Vendor::Gemini => &mut self.gemini,
        }
    }

    fn merge(&mut self, other: ProvidersConfig) {
        self.groq.merge(other.groq);
        self.gemini.merge(other.gemini);
    }
}

/// Settings for one vendor
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct VendorConfig {
    /// API key; a vendor without one is left out of the chain
    pub api_key: Option<String>,
    /// Override for the vendor API base URL
    pub base_url: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl VendorConfig {
    /// Whether a non-blank API key is present
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    fn merge(&mut self, other: VendorConfig) {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.temperature.is_some() {
            self.temperature = other.temperature;
        }
        if other.max_tokens.is_some() {
            self.max_tokens = other.max_tokens;
        }
    }
}

/// One configured entry of the fallback chain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChainEntry {
    pub name: String,
    pub vendor: Vendor,
    pub model: String,
}

impl ChainEntry {
    pub fn new(name: impl Into<String>, vendor: Vendor, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vendor,
            model: model.into(),
        }
    }

    /// Descriptor for this entry
    pub fn descriptor(&self) -> ProviderDescriptor {
        ProviderDescriptor::new(self.name.clone(), self.model.clone(), self.vendor)
    }
}

/// Failover settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FailoverConfig {
    /// Ordered chain; the first entry is the original provider
    pub chain: Vec<ChainEntry>,
    /// Seconds after a switch before reverting to the original provider
    pub cooldown_secs: u64,
    /// Number of switch/revert events kept for the status endpoint
    pub max_history: usize,
}

impl Default for FailoverConfig {
    fn default() -> Self {
        Self {
            chain: vec![
                ChainEntry::new(PRIMARY_ENTRY, Vendor::Groq, DEFAULT_PRIMARY_MODEL),
                ChainEntry::new(SECONDARY_ENTRY, Vendor::Groq, DEFAULT_SECONDARY_MODEL),
                ChainEntry::new(GEMINI_ENTRY, Vendor::Gemini, DEFAULT_GEMINI_MODEL),
            ],
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            max_history: 50,
        }
    }
}

impl FailoverConfig {
    /// Cooldown as a Duration
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    /// Set the model of a named chain entry. Returns false if no entry has that name.
    pub fn set_model(&mut self, entry_name: &str, model: impl Into<String>) -> bool {
        match self.chain.iter_mut().find(|e| e.name == entry_name) {
            Some(entry) => {
                entry.model = model.into();
                true
            }
            None => false,
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl ServerConfig {
    /// Parse the bind address
    pub fn socket_addr(&self) -> FolioResult<SocketAddr> {
        self.bind.parse().map_err(|e| {
            FolioError::config_with_context(
                format!("Invalid bind address '{}': {}", self.bind, e),
                "Parsing server.bind",
            )
        })
    }
}

impl FolioConfig {
    /// Merge another configuration on top of this one.
    ///
    /// Option fields override only when set; the chain is replaced wholesale
    /// when the other side defines one.
    pub fn merge(&mut self, other: FolioConfig) {
        self.providers.merge(other.providers);

        if !other.failover.chain.is_empty() {
            self.failover.chain = other.failover.chain;
        }
        self.failover.cooldown_secs = other.failover.cooldown_secs;
        self.failover.max_history = other.failover.max_history;

        if !other.server.bind.is_empty() {
            self.server.bind = other.server.bind;
        }

        self.logging.merge(other.logging);
        self.timeouts = other.timeouts;
    }

    /// Validate the configuration.
    ///
    /// Credentials are not checked here: a vendor without a key is simply
    /// dropped from the chain when the controller is built.
    pub fn validate(&self) -> FolioResult<()> {
        if self.failover.chain.is_empty() {
            return Err(FolioError::config("Fallback chain must contain at least one provider"));
        }

        let mut names = HashSet::new();
        for entry in &self.failover.chain {
            if entry.model.trim().is_empty() {
                return Err(FolioError::config(format!(
                    "Chain entry '{}' has an empty model",
                    entry.name
                )));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(FolioError::config(format!(
                    "Duplicate chain entry name: {}",
                    entry.name
                )));
            }
        }

        if self.failover.cooldown_secs == 0 {
            return Err(FolioError::config("failover.cooldown_secs must be greater than zero"));
        }

        if self.failover.max_history == 0 {
            return Err(FolioError::config("failover.max_history must be greater than zero"));
        }

        self.server.socket_addr()?;
        self.logging.validate()?;
        self.timeouts.validate()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain() {
        let config = FolioConfig::default();
        let names: Vec<_> = config.failover.chain.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec![PRIMARY_ENTRY, SECONDARY_ENTRY, GEMINI_ENTRY]);
        assert_eq!(config.failover.chain[0].model, "gemma2-9b-it");
        assert_eq!(config.failover.cooldown(), Duration::from_secs(1800));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let mut config = FolioConfig::default();
        config.failover.chain[1].name = PRIMARY_ENTRY.to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate chain entry"));
    }

    #[test]
    fn test_validate_rejects_empty_chain_and_zero_cooldown() {
        let mut config = FolioConfig::default();
        config.failover.chain.clear();
        assert!(config.validate().is_err());

        let mut config = FolioConfig::default();
        config.failover.cooldown_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_bind() {
        let mut config = FolioConfig::default();
        config.server.bind = "not-an-address".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_vendor_merge_keeps_unset_fields() {
        let mut base = VendorConfig {
            api_key: Some("key".into()),
            temperature: Some(0.2),
            ..Default::default()
        };
        base.merge(VendorConfig {
            max_tokens: Some(512),
            ..Default::default()
        });
        assert_eq!(base.api_key.as_deref(), Some("key"));
        assert_eq!(base.temperature, Some(0.2));
        assert_eq!(base.max_tokens, Some(512));
    }

    #[test]
    fn test_has_api_key_ignores_blank() {
        let cfg = VendorConfig {
            api_key: Some("   ".into()),
            ..Default::default()
        };
        assert!(!cfg.has_api_key());
    }

    #[test]
    fn test_set_model() {
        let mut failover = FailoverConfig::default();
        assert!(failover.set_model(GEMINI_ENTRY, "gemini-2.0-flash"));
        assert_eq!(failover.chain[2].model, "gemini-2.0-flash");
        assert!(!failover.set_model("missing", "x"));
    }
}
