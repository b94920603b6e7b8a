//! Environment variable-based configuration loading
//!
//! Vendor settings come from `GROQ_*` and `GEMINI_*` (or `GOOGLE_API_KEY`)
//! variables; chain and server settings from `FOLIO_*` variables.

use crate::error::{FolioError, FolioResult};
use crate::llm::provider_types::Vendor;
use std::env;
use std::str::FromStr;

use super::api_keys::standard_env_vars;
use super::model::{FolioConfig, GEMINI_ENTRY, PRIMARY_ENTRY, SECONDARY_ENTRY};

/// Apply environment variables from the process environment
pub fn apply_env(config: &mut FolioConfig) -> FolioResult<()> {
    apply_env_with(config, |name| env::var(name).ok())
}

/// Apply environment variables read through `lookup`
pub fn apply_env_with<F>(config: &mut FolioConfig, lookup: F) -> FolioResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    load_vendor_from_env(config, Vendor::Groq, "GROQ", &lookup)?;
    load_vendor_from_env(config, Vendor::Gemini, "GEMINI", &lookup)?;

    for (var, entry) in [
        ("FOLIO_PRIMARY_MODEL", PRIMARY_ENTRY),
        ("FOLIO_SECONDARY_MODEL", SECONDARY_ENTRY),
        ("FOLIO_GEMINI_MODEL", GEMINI_ENTRY),
    ] {
        if let Some(model) = lookup(var) {
            if !config.failover.set_model(entry, model) {
                tracing::warn!(var, entry, "Chain entry not present, ignoring model override");
            }
        }
    }

    if let Some(value) = lookup("FOLIO_COOLDOWN_SECS") {
        config.failover.cooldown_secs = parse_var("FOLIO_COOLDOWN_SECS", &value)?;
    }

    if let Some(bind) = lookup("FOLIO_BIND") {
        config.server.bind = bind;
    }

    if let Some(level) = lookup("FOLIO_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Some(format) = lookup("FOLIO_LOG_FORMAT") {
        config.logging.format = format.parse()?;
    }

    Ok(())
}

/// Load vendor configuration from environment variables
fn load_vendor_from_env<F>(
    config: &mut FolioConfig,
    vendor: Vendor,
    env_prefix: &str,
    lookup: &F,
) -> FolioResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let vendor_config = config.providers.for_vendor_mut(vendor);

    if let Some(api_key) = standard_env_vars(vendor)
        .iter()
        .find_map(|name| lookup(name).filter(|v| !v.trim().is_empty()))
    {
        vendor_config.api_key = Some(api_key);
    }

    if let Some(base_url) = lookup(&format!("{}_BASE_URL", env_prefix)) {
        vendor_config.base_url = Some(base_url);
    }

    let temp_var = format!("{}_TEMPERATURE", env_prefix);
    if let Some(temp) = lookup(&temp_var) {
        vendor_config.temperature = Some(parse_var(&temp_var, &temp)?);
    }

    let max_tokens_var = format!("{}_MAX_TOKENS", env_prefix);
    if let Some(max_tokens) = lookup(&max_tokens_var) {
        vendor_config.max_tokens = Some(parse_var(&max_tokens_var, &max_tokens)?);
    }

    Ok(())
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> FolioResult<T> {
    value.trim().parse().map_err(|_| {
        FolioError::config_with_context(
            format!("Invalid {} value", name),
            format!("Parsing environment value '{}'", value),
        )
    })
}
