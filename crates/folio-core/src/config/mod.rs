//! Configuration management

pub mod api_keys;
pub mod env_loader;
pub mod loader;
pub mod logging_config;
pub mod model;
pub mod timeouts;

pub use api_keys::{api_key_status, mask_api_key, standard_env_vars};
pub use loader::{ConfigLoader, ConfigSource, load_config};
pub use logging_config::{LogFormat, LoggingConfig};
pub use model::{
    ChainEntry, DEFAULT_COOLDOWN_SECS, FailoverConfig, FolioConfig, ProvidersConfig, ServerConfig,
    VendorConfig,
};
pub use timeouts::TimeoutConfig;
