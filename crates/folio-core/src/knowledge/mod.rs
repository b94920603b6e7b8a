//! Portfolio knowledge, prompt formatting and topic shortcuts

pub mod document;
pub mod formatter;
pub mod topics;

pub use document::{PORTFOLIO_KNOWLEDGE, find_project, project_names};
pub use formatter::{KnowledgePromptFormatter, PromptFormatter};
pub use topics::Topic;
