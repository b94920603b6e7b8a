//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - portfolio assistant with LLM provider failover")]
#[command(
    long_about = r#"Folio - portfolio assistant with LLM provider failover

USAGE:
  folio                          # Start the HTTP API (same as `folio serve`)
  folio serve --bind ADDR        # Start the HTTP API on ADDR
  folio chat                     # Interactive terminal chat
  folio ask "your question"      # Ask one question and exit

UTILITY COMMANDS:
  folio config show              # Show effective configuration
  folio config validate          # Check configuration and credentials"#
)]
#[command(version)]
pub struct Cli {
    /// Path to a configuration file (TOML, YAML or JSON)
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_parser = ["pretty", "compact", "json"])]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Socket address to bind
        #[arg(long)]
        bind: Option<String>,

        /// Seconds before reverting to the original provider after a switch
        #[arg(long)]
        cooldown_secs: Option<u64>,
    },

    /// Chat with the assistant in the terminal
    Chat,

    /// Ask a single question and print the answer
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display the effective configuration with masked API keys
    Show,

    /// Validate the configuration and build the fallback chain
    Validate,
}

impl Cli {
    /// Command-line overrides in the form expected by the config loader
    pub fn overrides(&self) -> HashMap<String, String> {
        let mut args = HashMap::new();

        if let Some(level) = &self.log_level {
            args.insert("log_level".to_string(), level.clone());
        }
        if let Some(format) = &self.log_format {
            args.insert("log_format".to_string(), format.clone());
        }

        if let Some(Commands::Serve {
            bind,
            cooldown_secs,
        }) = &self.command
        {
            if let Some(bind) = bind {
                args.insert("bind".to_string(), bind.clone());
            }
            if let Some(secs) = cooldown_secs {
                args.insert("cooldown_secs".to_string(), secs.to_string());
            }
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from([
            "folio",
            "--log-level",
            "debug",
            "serve",
            "--bind",
            "127.0.0.1:8080",
            "--cooldown-secs",
            "60",
        ]);
        let args = cli.overrides();
        assert_eq!(args.get("bind").map(String::as_str), Some("127.0.0.1:8080"));
        assert_eq!(args.get("cooldown_secs").map(String::as_str), Some("60"));
        assert_eq!(args.get("log_level").map(String::as_str), Some("debug"));
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::parse_from(["folio", "ask", "which", "projects?"]);
        match cli.command {
            Some(Commands::Ask { ref question }) => assert_eq!(question.join(" "), "which projects?"),
            _ => panic!("expected ask command"),
        }
        assert!(cli.overrides().is_empty());
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["folio", "--log-format", "xml", "chat"]).is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["folio"]);
        assert!(cli.command.is_none());
    }
}
