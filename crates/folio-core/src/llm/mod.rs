//! LLM providers, failure classification and failover

pub mod classifier;
pub mod failover;
pub mod provider_types;
pub mod providers;

pub use classifier::{AdapterError, FailureKind, classify};
pub use failover::{
    AskError, FailoverController, FailoverControllerBuilder, StatusSnapshot, SwitchEvent,
    SwitchReason,
};
pub use provider_types::{ProviderDescriptor, Vendor};
pub use providers::{ProviderAdapter, ProviderInstance};
