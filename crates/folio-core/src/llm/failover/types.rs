//! Type definitions for the failover controller

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::llm::classifier::{AdapterError, FailureKind};
use crate::llm::provider_types::ProviderDescriptor;

/// Why the active provider changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchReason {
    /// The provider reported a rate limit or quota exhaustion
    Capacity,
    /// The cooldown elapsed and the original provider was restored
    CooldownElapsed,
    /// An operator forced a revert
    Manual,
}

impl std::fmt::Display for SwitchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capacity => write!(f, "capacity"),
            Self::CooldownElapsed => write!(f, "cooldown elapsed"),
            Self::Manual => write!(f, "manual revert"),
        }
    }
}

/// Record of a provider switch or revert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchEvent {
    pub from: ProviderDescriptor,
    pub to: ProviderDescriptor,
    pub reason: SwitchReason,
    /// Adapter error that triggered a capacity switch
    pub detail: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Read-only view of the controller state
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub current: ProviderDescriptor,
    pub original: ProviderDescriptor,
    /// Time since the last switch away from the original provider
    pub elapsed_since_switch: Option<Duration>,
    /// Time left before the next call reverts; zero once the cooldown has elapsed
    pub remaining_cooldown: Option<Duration>,
    pub cooldown: Duration,
    /// Most recent events, oldest first
    pub history: Vec<SwitchEvent>,
}

impl StatusSnapshot {
    /// Whether a switch is in progress
    pub fn is_switched(&self) -> bool {
        self.elapsed_since_switch.is_some()
    }

    /// Human readable multi-line summary
    pub fn summary(&self) -> String {
        let mut status = format!(
            "Current Model: {}\nOriginal Model: {}\n",
            self.current.model_id, self.original.model_id
        );

        match (self.elapsed_since_switch, self.remaining_cooldown) {
            (Some(elapsed), Some(remaining)) if !remaining.is_zero() => {
                status.push_str(&format!(
                    "Switched {}s ago, {}s remaining before switch back",
                    elapsed.as_secs(),
                    remaining.as_secs()
                ));
            }
            (Some(_), _) => status.push_str("Ready to switch back to original model"),
            (None, _) => status.push_str("No model switch in progress"),
        }

        status
    }
}

/// Failure returned by [`FailoverController::ask`](super::FailoverController::ask)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AskError {
    /// The provider failed with a transient or fatal error; no switch was made
    #[error("Sorry, I encountered an error: {error}")]
    Provider {
        provider: ProviderDescriptor,
        kind: FailureKind,
        error: AdapterError,
    },

    /// The provider hit a capacity limit and no fallback remains after it
    #[error("Sorry, I encountered a rate limit error: {error}")]
    ChainExhausted {
        provider: ProviderDescriptor,
        error: AdapterError,
    },

    /// The retry on the fallback provider failed too
    #[error("Sorry, I encountered an error even after switching models: {error}")]
    RetryFailed {
        from: ProviderDescriptor,
        to: ProviderDescriptor,
        kind: FailureKind,
        error: AdapterError,
    },
}

impl AskError {
    /// Classification of the final adapter error
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Provider { kind, .. } | Self::RetryFailed { kind, .. } => *kind,
            Self::ChainExhausted { .. } => FailureKind::Capacity,
        }
    }

    /// Provider that produced the final error
    pub fn provider(&self) -> &ProviderDescriptor {
        match self {
            Self::Provider { provider, .. } | Self::ChainExhausted { provider, .. } => provider,
            Self::RetryFailed { to, .. } => to,
        }
    }

    /// The final adapter error
    pub fn adapter_error(&self) -> &AdapterError {
        match self {
            Self::Provider { error, .. }
            | Self::ChainExhausted { error, .. }
            | Self::RetryFailed { error, .. } => error,
        }
    }
}
