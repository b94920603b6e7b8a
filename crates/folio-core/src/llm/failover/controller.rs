//! Failover controller: single active provider shared by all callers

use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::knowledge::{PromptFormatter, Topic};
use crate::llm::classifier::{AdapterError, FailureKind, classify};
use crate::llm::provider_types::ProviderDescriptor;
use crate::llm::providers::ProviderAdapter;

use super::state::{Advance, FailoverState};
use super::types::{AskError, StatusSnapshot, SwitchEvent, SwitchReason};

/// One position in the fallback chain
pub(super) struct ChainSlot {
    pub descriptor: ProviderDescriptor,
    pub adapter: Arc<dyn ProviderAdapter>,
}

/// Routes questions to the current provider, falls back on capacity failures
/// and reverts to the original provider once the cooldown has elapsed.
///
/// The state mutex is only held for metadata updates; adapter calls run
/// outside it.
pub struct FailoverController {
    pub(super) chain: Vec<ChainSlot>,
    pub(super) formatter: Arc<dyn PromptFormatter>,
    pub(super) cooldown: Duration,
    pub(super) state: Mutex<FailoverState>,
}

impl FailoverController {
    /// Answer a question, switching provider at most once on a capacity failure
    pub async fn ask(&self, question: &str) -> Result<String, AskError> {
        let prompt = self.formatter.format(question);
        let tried = self.begin_call();
        let slot = &self.chain[tried];

        let error = match self.generate(slot, &prompt).await {
            Ok(text) => return Ok(text),
            Err(error) => error,
        };

        let kind = classify(&error);
        if kind != FailureKind::Capacity {
            warn!(
                provider = %slot.descriptor.name,
                model = %slot.descriptor.model_id,
                kind = %kind,
                error = %error,
                "Provider call failed"
            );
            return Err(AskError::Provider {
                provider: slot.descriptor.clone(),
                kind,
                error,
            });
        }

        let retry_index = match self.advance_from(tried, &error) {
            Advance::Exhausted => {
                warn!(
                    provider = %slot.descriptor.name,
                    error = %error,
                    "Capacity failure with no fallback remaining"
                );
                return Err(AskError::ChainExhausted {
                    provider: slot.descriptor.clone(),
                    error,
                });
            }
            Advance::Switched { to, .. } | Advance::AlreadyMoved { to } => to,
        };

        let retry_slot = &self.chain[retry_index];
        match self.generate(retry_slot, &prompt).await {
            Ok(text) => {
                info!(
                    provider = %retry_slot.descriptor.name,
                    "Answered after falling back"
                );
                Ok(text)
            }
            Err(retry_error) => {
                let kind = classify(&retry_error);
                warn!(
                    provider = %retry_slot.descriptor.name,
                    kind = %kind,
                    error = %retry_error,
                    "Fallback provider failed"
                );
                Err(AskError::RetryFailed {
                    from: slot.descriptor.clone(),
                    to: retry_slot.descriptor.clone(),
                    kind,
                    error: retry_error,
                })
            }
        }
    }

    /// Ask a canned topic question
    pub async fn ask_topic(&self, topic: &Topic) -> Result<String, AskError> {
        self.ask(&topic.question()).await
    }

    /// Current state; never reverts
    pub fn status(&self) -> StatusSnapshot {
        let state = self.state.lock();
        let now = Instant::now();
        let elapsed = state
            .switched_at
            .map(|at| now.saturating_duration_since(at));

        StatusSnapshot {
            current: self.chain[state.current].descriptor.clone(),
            original: self.chain[0].descriptor.clone(),
            elapsed_since_switch: elapsed,
            remaining_cooldown: elapsed.map(|e| self.cooldown.saturating_sub(e)),
            cooldown: self.cooldown,
            history: state.history.iter().cloned().collect(),
        }
    }

    /// Restore the original provider. Returns whether `current` changed.
    pub fn force_revert(&self) -> bool {
        let mut state = self.state.lock();
        let changed = self.revert(&mut state, SwitchReason::Manual);
        if !changed {
            debug!("Force revert requested while already on original provider");
        }
        changed
    }

    /// The currently active provider
    pub fn current(&self) -> ProviderDescriptor {
        let state = self.state.lock();
        self.chain[state.current].descriptor.clone()
    }

    /// The provider the controller reverts to
    pub fn original(&self) -> &ProviderDescriptor {
        &self.chain[0].descriptor
    }

    /// Configured chain, in fallback order
    pub fn chain(&self) -> Vec<ProviderDescriptor> {
        self.chain.iter().map(|s| s.descriptor.clone()).collect()
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Recorded switch and revert events, oldest first
    pub fn history(&self) -> Vec<SwitchEvent> {
        self.state.lock().history.iter().cloned().collect()
    }

    /// Revert if due, then snapshot the index to call
    fn begin_call(&self) -> usize {
        let mut state = self.state.lock();
        if state.revert_due(Instant::now(), self.cooldown) {
            self.revert(&mut state, SwitchReason::CooldownElapsed);
        }
        state.current
    }

    /// Shared by the lazy cooldown path and `force_revert`
    fn revert(&self, state: &mut FailoverState, reason: SwitchReason) -> bool {
        match state.revert() {
            Some(previous) => {
                let from = &self.chain[previous].descriptor;
                info!(
                    from = %from.name,
                    to = %self.chain[0].descriptor.name,
                    reason = %reason,
                    "Reverted to original provider"
                );
                state.record(SwitchEvent {
                    from: from.clone(),
                    to: self.chain[0].descriptor.clone(),
                    reason,
                    detail: None,
                    timestamp: Utc::now(),
                });
                true
            }
            None => false,
        }
    }

    fn advance_from(&self, tried: usize, error: &AdapterError) -> Advance {
        let mut state = self.state.lock();
        let outcome = state.advance_from(tried, self.chain.len(), Instant::now());

        match outcome {
            Advance::Switched { from, to } => {
                let (from, to) = (&self.chain[from].descriptor, &self.chain[to].descriptor);
                warn!(
                    from = %from.name,
                    to = %to.name,
                    to_model = %to.model_id,
                    "Capacity limit reached, switching provider"
                );
                state.record(SwitchEvent {
                    from: from.clone(),
                    to: to.clone(),
                    reason: SwitchReason::Capacity,
                    detail: Some(error.raw_message.clone()),
                    timestamp: Utc::now(),
                });
            }
            Advance::AlreadyMoved { to } => {
                debug!(
                    provider = %self.chain[to].descriptor.name,
                    "Provider already switched by another request"
                );
            }
            Advance::Exhausted => {}
        }

        outcome
    }

    async fn generate(&self, slot: &ChainSlot, prompt: &str) -> Result<String, AdapterError> {
        let started = Instant::now();
        let result = slot.adapter.generate(prompt).await;
        debug!(
            provider = %slot.descriptor.name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "Provider call finished"
        );
        result.map(|text| text.trim().to_string())
    }
}

impl std::fmt::Debug for FailoverController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FailoverController")
            .field("chain", &self.chain())
            .field("cooldown", &self.cooldown)
            .field("state", &*self.state.lock())
            .finish()
    }
}
