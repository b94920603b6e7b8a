//! Prompt formatting

use std::borrow::Cow;

use super::document::PORTFOLIO_KNOWLEDGE;

/// Renders a user question into the final prompt sent to a provider
#[cfg_attr(test, mockall::automock)]
pub trait PromptFormatter: Send + Sync {
    fn format(&self, question: &str) -> String;
}

/// Formatter that prepends the knowledge document to every question
#[derive(Debug, Clone)]
pub struct KnowledgePromptFormatter {
    document: Cow<'static, str>,
}

impl KnowledgePromptFormatter {
    /// Use a custom knowledge document
    pub fn new(document: impl Into<Cow<'static, str>>) -> Self {
        Self {
            document: document.into(),
        }
    }

    pub fn document(&self) -> &str {
        &self.document
    }
}

impl Default for KnowledgePromptFormatter {
    fn default() -> Self {
        Self::new(PORTFOLIO_KNOWLEDGE)
    }
}

impl PromptFormatter for KnowledgePromptFormatter {
    fn format(&self, question: &str) -> String {
        format!(
            "{}\n\nUser Query: \"{}\"\n\nAnswer:\n",
            self.document.trim_end(),
            question.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_wraps_question() {
        let formatter = KnowledgePromptFormatter::new("KNOWLEDGE\n\n");
        assert_eq!(
            formatter.format("  What is Quick Eats? "),
            "KNOWLEDGE\n\nUser Query: \"What is Quick Eats?\"\n\nAnswer:\n"
        );
    }

    #[test]
    fn test_default_uses_embedded_document() {
        let prompt = KnowledgePromptFormatter::default().format("hi");
        assert!(prompt.starts_with("I am Abhishek Ambi's AI assistant"));
        assert!(prompt.contains("PROJECT PORTFOLIO:"));
        assert!(prompt.ends_with("User Query: \"hi\"\n\nAnswer:\n"));
    }
}
