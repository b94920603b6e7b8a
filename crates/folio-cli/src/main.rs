//! Folio CLI application
//!
//! Serves the portfolio assistant over HTTP or in a terminal.
//!
//! ```bash
//! folio serve --bind 127.0.0.1:7860   # HTTP API and web page
//! folio chat                          # Interactive terminal chat
//! folio ask "What projects use Rust?" # One question, then exit
//! folio config show                   # Effective configuration
//! ```
//!
//! Credentials are read from `GROQ_API_KEY` and `GEMINI_API_KEY` (a `.env`
//! file in the working directory is honoured).

mod api;
mod args;
mod commands;
mod console;
mod logging;
mod router;

use clap::Parser;
use std::process::ExitCode;

use args::Cli;
use console::CliConsole;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    match router::route(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            CliConsole::default().report(&e);
            ExitCode::FAILURE
        }
    }
}
