//! API key lookup and display helpers

use crate::llm::provider_types::Vendor;

use super::model::FolioConfig;

/// Standard environment variable names for a vendor, in lookup order
pub fn standard_env_vars(vendor: Vendor) -> &'static [&'static str] {
    match vendor {
        Vendor::Groq => &["GROQ_API_KEY"],
        Vendor::Gemini => &["GEMINI_API_KEY", "GOOGLE_API_KEY"],
    }
}

/// Mask an API key for display
pub fn mask_api_key(key: &str) -> String {
    let len = key.len();
    if len <= 12 || !key.is_ascii() {
        return "*".repeat(len.min(12));
    }

    let prefix = &key[..8];
    let suffix = &key[len - 4..];
    let mask_len = len - 12;

    format!("{}{}...{}", prefix, "*".repeat(mask_len.min(8)), suffix)
}

/// One line per vendor describing whether a key is configured
pub fn api_key_status(config: &FolioConfig) -> Vec<String> {
    [Vendor::Groq, Vendor::Gemini]
        .into_iter()
        .map(|vendor| {
            let vendor_config = config.providers.for_vendor(vendor);
            match vendor_config.api_key.as_deref() {
                Some(key) if vendor_config.has_api_key() => {
                    format!("✓ {} API key: {}", vendor, mask_api_key(key))
                }
                _ => format!(
                    "✗ {} API key missing. Set {} or add to config",
                    vendor,
                    standard_env_vars(vendor)[0]
                ),
            }
        })
        .collect()
}
