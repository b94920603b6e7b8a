//! Provider-specific implementations

pub mod error_utils;
pub mod gemini;
pub mod groq;
pub mod provider_trait;

pub use gemini::GeminiProvider;
pub use groq::GroqProvider;
pub use provider_trait::{ProviderAdapter, ProviderInstance};

#[cfg(test)]
pub use provider_trait::MockProviderAdapter;

use crate::config::{TimeoutConfig, VendorConfig};
use crate::error::{FolioError, FolioResult};
use crate::llm::provider_types::{ProviderDescriptor, Vendor};
use reqwest::Client;

/// Build the shared HTTP client used by every adapter
pub fn build_http_client(timeouts: &TimeoutConfig) -> FolioResult<Client> {
    Client::builder()
        .connect_timeout(timeouts.connect_timeout())
        .timeout(timeouts.request_timeout())
        .build()
        .map_err(|e| {
            FolioError::config_with_context(
                format!("Failed to create HTTP client: {}", e),
                "Building provider HTTP client",
            )
        })
}

/// Create the adapter serving `descriptor`
pub fn create_provider(
    descriptor: &ProviderDescriptor,
    settings: &VendorConfig,
    http_client: Client,
) -> FolioResult<ProviderInstance> {
    let instance = match descriptor.vendor {
        Vendor::Groq => {
            ProviderInstance::Groq(GroqProvider::new(descriptor, settings, http_client)?)
        }
        Vendor::Gemini => {
            ProviderInstance::Gemini(GeminiProvider::new(descriptor, settings, http_client)?)
        }
    };
    Ok(instance)
}
