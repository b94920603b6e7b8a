//! Failover controller tests

mod switching;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Barrier;

use super::{FailoverController, FailoverControllerBuilder};
use crate::knowledge::PromptFormatter;
use crate::llm::classifier::AdapterError;
use crate::llm::provider_types::{ProviderDescriptor, Vendor};
use crate::llm::providers::ProviderAdapter;

pub(super) const COOLDOWN: Duration = Duration::from_secs(1800);

/// Adapter whose reply can be changed mid-test
pub(super) struct ScriptedAdapter {
    name: String,
    reply: Mutex<Result<(), AdapterError>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    gate: Option<Arc<Barrier>>,
}

impl ScriptedAdapter {
    pub fn answering(name: &str) -> Arc<Self> {
        Arc::new(Self::new(name, Ok(()), None))
    }

    pub fn failing(name: &str, error: AdapterError) -> Arc<Self> {
        Arc::new(Self::new(name, Err(error), None))
    }

    /// Fails only after `gate` releases, so concurrent callers fail together
    pub fn gated_failing(name: &str, error: AdapterError, gate: Arc<Barrier>) -> Arc<Self> {
        Arc::new(Self::new(name, Err(error), Some(gate)))
    }

    fn new(name: &str, reply: Result<(), AdapterError>, gate: Option<Arc<Barrier>>) -> Self {
        Self {
            name: name.to_string(),
            reply: Mutex::new(reply),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            gate,
        }
    }

    pub fn answer(&self) {
        *self.reply.lock() = Ok(());
    }

    pub fn fail_with(&self, error: AdapterError) {
        *self.reply.lock() = Err(error);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl ProviderAdapter for ScriptedAdapter {
    async fn generate(&self, prompt: &str) -> Result<String, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().push(prompt.to_string());

        if let Some(gate) = &self.gate {
            gate.wait().await;
        }

        let reply = self.reply.lock().clone();
        reply.map(|()| format!("  answer from {}\n", self.name))
    }
}

/// Passes the question through unchanged
pub(super) struct EchoFormatter;

impl PromptFormatter for EchoFormatter {
    fn format(&self, question: &str) -> String {
        question.to_string()
    }
}

pub(super) fn descriptor(name: &str) -> ProviderDescriptor {
    ProviderDescriptor::new(name, format!("{}-model", name), Vendor::Groq)
}

pub(super) fn capacity_error() -> AdapterError {
    AdapterError::with_status(
        "Groq API error (status 429 Too Many Requests): Rate limit reached on tokens per day (TPD)",
        429,
    )
}

pub(super) fn fatal_error() -> AdapterError {
    AdapterError::with_status("Groq API error (status 401 Unauthorized): Invalid API Key", 401)
}

pub(super) fn transient_error() -> AdapterError {
    AdapterError::new("Groq request failed: connection reset by peer")
}

/// Controller over `adapters`, in chain order, with an echo formatter
pub(super) fn controller(adapters: &[&Arc<ScriptedAdapter>]) -> FailoverController {
    let mut builder = FailoverControllerBuilder::new()
        .cooldown(COOLDOWN)
        .formatter(Arc::new(EchoFormatter));
    for adapter in adapters {
        let name = adapter.name.clone();
        let adapter: Arc<dyn ProviderAdapter> = Arc::clone(adapter) as _;
        builder = builder.provider(descriptor(&name), adapter);
    }
    builder.build().unwrap()
}
