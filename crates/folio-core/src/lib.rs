//! Folio Core Library
//!
//! Answers portfolio questions by delegating generation to a remote LLM
//! provider. The [`FailoverController`] keeps a single active provider,
//! switches down the fallback chain on rate-limit failures and returns to
//! the original provider after a cooldown.

pub mod config;
pub mod error;
pub mod knowledge;
pub mod llm;

// Re-export commonly used types
pub use config::{ConfigLoader, FolioConfig, load_config};
pub use error::{FolioError, FolioResult};
pub use knowledge::{KnowledgePromptFormatter, PromptFormatter, Topic};
pub use llm::{
    AdapterError, AskError, FailoverController, FailoverControllerBuilder, FailureKind,
    ProviderAdapter, ProviderDescriptor, StatusSnapshot, SwitchEvent, SwitchReason, Vendor,
    classify,
};
