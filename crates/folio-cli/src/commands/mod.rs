//! Command implementations

pub mod ask;
pub mod chat;
pub mod config;
pub mod serve;

use folio_core::config::FolioConfig;
use folio_core::error::FolioResult;
use folio_core::llm::{FailoverController, FailoverControllerBuilder};
use std::sync::Arc;

/// Build the shared controller from configuration
pub fn build_controller(config: &FolioConfig) -> FolioResult<Arc<FailoverController>> {
    let controller = FailoverControllerBuilder::from_config(config)?.build()?;
    Ok(Arc::new(controller))
}
