//! Shared state for request handlers

use folio_core::knowledge::{PORTFOLIO_KNOWLEDGE, project_names};
use folio_core::llm::FailoverController;
use std::sync::Arc;

/// State shared by all handlers
pub struct AppState {
    controller: Option<Arc<FailoverController>>,
    projects: Vec<String>,
}

impl AppState {
    /// Create state around a ready controller
    pub fn new(controller: Arc<FailoverController>) -> Self {
        Self {
            controller: Some(controller),
            projects: project_names(PORTFOLIO_KNOWLEDGE),
        }
    }

    /// State without a controller; generation endpoints answer 500
    #[cfg(test)]
    pub fn uninitialized() -> Self {
        Self {
            controller: None,
            projects: project_names(PORTFOLIO_KNOWLEDGE),
        }
    }

    pub fn controller(&self) -> Option<&Arc<FailoverController>> {
        self.controller.as_ref()
    }

    /// Project names listed in the embedded knowledge document
    pub fn projects(&self) -> &[String] {
        &self.projects
    }
}
