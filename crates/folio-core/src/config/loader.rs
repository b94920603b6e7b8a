//! Configuration loading and management

use crate::error::{FolioError, FolioResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::env_loader;
use super::model::{FolioConfig, GEMINI_ENTRY, PRIMARY_ENTRY, SECONDARY_ENTRY};

/// Source of configuration data
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Configuration from a file (TOML, YAML or JSON by extension)
    File(PathBuf),
    /// Configuration from environment variables
    Environment,
    /// Configuration from command line arguments
    CommandLine(HashMap<String, String>),
    /// Default configuration
    Default,
}

/// Configuration loader with support for multiple sources.
///
/// Sources are applied in the order they were added; later sources win.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a configuration source
    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add a file source
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.add_source(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    /// Add environment variables source
    pub fn with_env(self) -> Self {
        self.add_source(ConfigSource::Environment)
    }

    /// Add command line arguments source
    pub fn with_args(self, args: HashMap<String, String>) -> Self {
        self.add_source(ConfigSource::CommandLine(args))
    }

    /// Add default configuration source
    pub fn with_defaults(self) -> Self {
        self.add_source(ConfigSource::Default)
    }

    /// Load configuration from all sources
    pub fn load(self) -> FolioResult<FolioConfig> {
        let mut config = FolioConfig::default();

        for source in &self.sources {
            self.apply_source(source, &mut config)?;
        }

        config.validate()?;
        tracing::debug!(
            chain_len = config.failover.chain.len(),
            cooldown_secs = config.failover.cooldown_secs,
            bind = %config.server.bind,
            "Configuration loaded"
        );
        Ok(config)
    }

    fn apply_source(&self, source: &ConfigSource, config: &mut FolioConfig) -> FolioResult<()> {
        match source {
            ConfigSource::File(path) => {
                tracing::debug!("Loading config from file: {}", path.display());
                if let Some(file_config) = load_from_file(path)? {
                    config.merge(file_config);
                }
            }
            ConfigSource::Environment => {
                tracing::debug!("Loading config from environment");
                env_loader::apply_env(config)?;
            }
            ConfigSource::CommandLine(args) => {
                tracing::debug!("Loading config from command line");
                apply_args(config, args)?;
            }
            ConfigSource::Default => {
                tracing::debug!("Loading default config");
                *config = FolioConfig::default();
            }
        }
        Ok(())
    }
}

/// Load configuration from a file. A missing file yields `None`.
pub fn load_from_file(path: &Path) -> FolioResult<Option<FolioConfig>> {
    if !path.exists() {
        tracing::debug!("Config file {} not found, skipping", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        FolioError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading configuration from '{}'", path.display()),
        )
    })?;

    let config: FolioConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            FolioError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            FolioError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            FolioError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(Some(config))
}

/// Apply command line overrides.
///
/// Recognized keys: `bind`, `cooldown_secs`, `primary_model`,
/// `secondary_model`, `gemini_model`, `log_level`, `log_format`.
fn apply_args(config: &mut FolioConfig, args: &HashMap<String, String>) -> FolioResult<()> {
    if let Some(bind) = args.get("bind") {
        config.server.bind = bind.clone();
    }

    if let Some(cooldown) = args.get("cooldown_secs") {
        config.failover.cooldown_secs = cooldown.parse().map_err(|_| {
            FolioError::config(format!("Invalid cooldown value: {}", cooldown))
        })?;
    }

    for (key, entry) in [
        ("primary_model", PRIMARY_ENTRY),
        ("secondary_model", SECONDARY_ENTRY),
        ("gemini_model", GEMINI_ENTRY),
    ] {
        if let Some(model) = args.get(key) {
            config.failover.set_model(entry, model.clone());
        }
    }

    if let Some(level) = args.get("log_level") {
        config.logging.level = level.clone();
    }

    if let Some(format) = args.get("log_format") {
        config.logging.format = format.parse()?;
    }

    Ok(())
}

/// Load configuration with the standard source order:
/// defaults, then the optional file, then environment, then command line.
pub fn load_config(
    config_file: Option<&Path>,
    args: HashMap<String, String>,
) -> FolioResult<FolioConfig> {
    let mut loader = ConfigLoader::new().with_defaults();
    if let Some(path) = config_file {
        loader = loader.with_file(path);
    }
    loader.with_env().with_args(args).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider_types::Vendor;
    use std::io::Write;

    fn write_temp(ext: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{}", ext))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_toml_file() {
        let file = write_temp(
            "toml",
            r#"
[providers.groq]
api_key = "gsk_from_file"
temperature = 0.5

[failover]
cooldown_secs = 120

[[failover.chain]]
name = "only"
vendor = "groq"
model = "llama-3.1-8b-instant"
"#,
        );

        let config = ConfigLoader::new()
            .with_defaults()
            .with_file(file.path())
            .load()
            .unwrap();

        assert_eq!(config.providers.groq.api_key.as_deref(), Some("gsk_from_file"));
        assert_eq!(config.failover.cooldown_secs, 120);
        assert_eq!(config.failover.chain.len(), 1);
        assert_eq!(config.failover.chain[0].vendor, Vendor::Groq);
        assert_eq!(config.server.bind, "0.0.0.0:7860");
    }

    #[test]
    fn test_load_yaml_file_keeps_default_chain() {
        let file = write_temp(
            "yaml",
            "server:\n  bind: \"127.0.0.1:8080\"\nlogging:\n  level: debug\n",
        );

        let config = ConfigLoader::new()
            .with_defaults()
            .with_file(file.path())
            .load()
            .unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.failover.chain.len(), 3);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let config = ConfigLoader::new()
            .with_defaults()
            .with_file("/nonexistent/folio.toml")
            .load()
            .unwrap();
        assert_eq!(config.failover.cooldown_secs, 1800);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let file = write_temp("json", "{ not json");
        let err = ConfigLoader::new().with_file(file.path()).load().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn test_args_override() {
        let mut args = HashMap::new();
        args.insert("bind".to_string(), "127.0.0.1:3000".to_string());
        args.insert("secondary_model".to_string(), "llama3-70b-8192".to_string());

        let config = ConfigLoader::new().with_defaults().with_args(args).load().unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.failover.chain[1].model, "llama3-70b-8192");
    }

    #[test]
    fn test_invalid_final_config_rejected() {
        let mut args = HashMap::new();
        args.insert("cooldown_secs".to_string(), "0".to_string());
        assert!(ConfigLoader::new().with_defaults().with_args(args).load().is_err());
    }
}
