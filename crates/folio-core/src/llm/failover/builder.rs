//! Builder for creating failover controllers

use parking_lot::Mutex;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{DEFAULT_COOLDOWN_SECS, FolioConfig, standard_env_vars};
use crate::error::{FolioError, FolioResult};
use crate::knowledge::{KnowledgePromptFormatter, PromptFormatter};
use crate::llm::provider_types::ProviderDescriptor;
use crate::llm::providers::{ProviderAdapter, build_http_client, create_provider};

use super::controller::{ChainSlot, FailoverController};
use super::state::FailoverState;

/// Default number of switch events kept
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Builder for creating failover controllers
pub struct FailoverControllerBuilder {
    chain: Vec<ChainSlot>,
    formatter: Option<Arc<dyn PromptFormatter>>,
    cooldown: Duration,
    max_history: usize,
}

impl FailoverControllerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            chain: Vec::new(),
            formatter: None,
            cooldown: Duration::from_secs(DEFAULT_COOLDOWN_SECS),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }

    /// Append a provider to the chain. The first provider added is the original.
    pub fn provider(
        mut self,
        descriptor: ProviderDescriptor,
        adapter: Arc<dyn ProviderAdapter>,
    ) -> Self {
        self.chain.push(ChainSlot {
            descriptor,
            adapter,
        });
        self
    }

    /// Set the prompt formatter (defaults to the embedded knowledge document)
    pub fn formatter(mut self, formatter: Arc<dyn PromptFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Set the revert cooldown
    pub fn cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Set max history size
    pub fn max_history(mut self, max: usize) -> Self {
        self.max_history = max;
        self
    }

    /// Build the chain from configuration, leaving out vendors without an API key
    pub fn from_config(config: &FolioConfig) -> FolioResult<Self> {
        let http_client = build_http_client(&config.timeouts)?;
        let mut builder = Self::new()
            .cooldown(config.failover.cooldown())
            .max_history(config.failover.max_history);

        for entry in &config.failover.chain {
            let settings = config.providers.for_vendor(entry.vendor);
            if !settings.has_api_key() {
                tracing::warn!(
                    provider = %entry.name,
                    vendor = %entry.vendor,
                    "No API key for vendor, leaving provider out of the chain"
                );
                continue;
            }

            let descriptor = entry.descriptor();
            let adapter = create_provider(&descriptor, settings, http_client.clone())?;
            tracing::debug!(provider = %descriptor, "Provider added to chain");
            builder = builder.provider(descriptor, Arc::new(adapter));
        }

        if builder.chain.is_empty() {
            let hints: BTreeSet<&str> = config
                .failover
                .chain
                .iter()
                .map(|e| standard_env_vars(e.vendor)[0])
                .collect();
            let hints: Vec<&str> = hints.into_iter().collect();
            return Err(FolioError::config_with_context(
                "No provider credentials configured",
                format!("Set one of: {}", hints.join(", ")),
            ));
        }

        Ok(builder)
    }

    /// Build the controller
    pub fn build(self) -> FolioResult<FailoverController> {
        if self.chain.is_empty() {
            return Err(FolioError::config("No providers configured for failover"));
        }

        let mut seen = HashSet::new();
        for slot in &self.chain {
            if !seen.insert(&slot.descriptor) {
                return Err(FolioError::config(format!(
                    "Provider {} appears twice in the fallback chain",
                    slot.descriptor
                )));
            }
        }

        if self.max_history == 0 {
            return Err(FolioError::config("max_history must be greater than zero"));
        }

        tracing::info!(
            original = %self.chain[0].descriptor,
            chain_len = self.chain.len(),
            cooldown_secs = self.cooldown.as_secs(),
            "Failover controller ready"
        );

        Ok(FailoverController {
            chain: self.chain,
            formatter: self
                .formatter
                .unwrap_or_else(|| Arc::new(KnowledgePromptFormatter::default())),
            cooldown: self.cooldown,
            state: Mutex::new(FailoverState::new(self.max_history)),
        })
    }
}

impl Default for FailoverControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FailoverControllerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FailoverControllerBuilder")
            .field("chain_len", &self.chain.len())
            .field("has_formatter", &self.formatter.is_some())
            .field("cooldown", &self.cooldown)
            .field("max_history", &self.max_history)
            .finish()
    }
}
