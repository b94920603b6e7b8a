//! Interactive terminal chat

use crate::console::CliConsole;
use folio_core::config::FolioConfig;
use folio_core::error::FolioResult;
use folio_core::llm::FailoverController;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// What a line of chat input asks for
#[derive(Debug, PartialEq, Eq)]
enum ChatInput<'a> {
    Quit,
    Status,
    Switch,
    Skip,
    Question(&'a str),
}

fn parse_input(line: &str) -> ChatInput<'_> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => ChatInput::Skip,
        "quit" | "exit" | "bye" => ChatInput::Quit,
        "status" => ChatInput::Status,
        "switch" => ChatInput::Switch,
        _ => ChatInput::Question(line),
    }
}

/// Run the chat loop on stdin until the user quits or input ends
pub async fn run(config: &FolioConfig) -> FolioResult<()> {
    let console = CliConsole::default();
    let controller = super::build_controller(config)?;

    console.print_header("Folio portfolio assistant");
    console.info(&format!("Model: {}", controller.current().model_id));
    console.info(
        "Type 'status' for model status, 'switch' to return to the original model, 'quit' to exit",
    );
    console.print_separator();

    chat_loop(&console, &controller, BufReader::new(tokio::io::stdin())).await?;

    console.success("Goodbye!");
    Ok(())
}

async fn chat_loop<R>(
    console: &CliConsole,
    controller: &FailoverController,
    input: R,
) -> FolioResult<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        console.prompt("You:")?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            ChatInput::Quit => break,
            ChatInput::Skip => continue,
            ChatInput::Status => println!("{}", controller.status().summary()),
            ChatInput::Switch => switch_back(console, controller),
            ChatInput::Question(question) => match controller.ask(question).await {
                Ok(answer) => console.answer(&answer),
                Err(e) => console.error(&e.to_string()),
            },
        }
    }
    Ok(())
}

fn switch_back(console: &CliConsole, controller: &FailoverController) {
    let original = &controller.original().model_id;
    if controller.force_revert() {
        console.success(&format!("Forced switch back to {}", original));
    } else {
        console.info(&format!("Already using original model: {}", original));
    }
}
