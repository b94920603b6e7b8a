//! Error types for Folio
//!
//! This module provides the crate-wide error type. Every variant carries a
//! human-readable message plus optional context describing where the error
//! occurred. Errors produced by provider adapters never appear here directly:
//! they are normalized into [`crate::llm::AdapterError`] first.

mod constructors;
mod conversions;
mod types;
mod unified_error;

pub use types::{FolioError, FolioResult, UnifiedError};
