//! One-shot question

use crate::console::CliConsole;
use folio_core::config::FolioConfig;
use folio_core::error::{FolioError, FolioResult};

/// Ask a single question and print the answer
pub async fn run(config: &FolioConfig, question: &str) -> FolioResult<()> {
    let question = question.trim();
    if question.is_empty() {
        return Err(FolioError::invalid_input_field(
            "Question cannot be empty",
            "question",
        ));
    }

    let console = CliConsole::new(false);
    let controller = super::build_controller(config)?;

    let answer = controller.ask(question).await?;
    console.answer(&answer);
    Ok(())
}
