//! Configuration inspection commands

use crate::console::CliConsole;
use colored::*;
use folio_core::config::{FolioConfig, api_key_status};
use folio_core::error::FolioResult;
use std::path::Path;

/// Show the effective configuration
pub fn show(config: &FolioConfig, config_file: Option<&Path>) -> FolioResult<()> {
    let console = CliConsole::default();

    console.print_header("Configuration");
    match config_file {
        Some(path) if path.exists() => {
            console.success(&format!("Loaded configuration from: {}", path.display()))
        }
        Some(path) => console.warn(&format!(
            "Configuration file not found: {}; using defaults and environment",
            path.display()
        )),
        None => console.info("No configuration file; using defaults and environment"),
    }

    print_config(config);
    Ok(())
}

/// Validate the configuration and build the fallback chain
pub fn validate(config: &FolioConfig) -> FolioResult<()> {
    let console = CliConsole::default();

    console.print_header("Configuration Validation");
    console.success("Configuration is valid");

    let controller = super::build_controller(config)?;
    console.success("Fallback chain:");
    for (i, descriptor) in controller.chain().iter().enumerate() {
        println!("  {}. {}", i + 1, descriptor);
    }
    Ok(())
}

fn print_config(config: &FolioConfig) {
    println!();
    println!("{}", "Credentials:".bold());
    for line in api_key_status(config) {
        println!("  {}", line);
    }

    println!();
    println!("{}", "Fallback chain:".bold());
    for (i, entry) in config.failover.chain.iter().enumerate() {
        let has_key = config.providers.for_vendor(entry.vendor).has_api_key();
        let marker = if has_key { "✓".green() } else { "✗".red() };
        println!(
            "  {}. {} {} ({}/{})",
            i + 1,
            marker,
            entry.name.cyan(),
            entry.vendor,
            entry.model
        );
    }

    println!();
    println!("{}", "Settings:".bold());
    println!("  Cooldown: {}s", config.failover.cooldown_secs);
    println!("  History size: {}", config.failover.max_history);
    println!("  Bind: {}", config.server.bind);
    println!(
        "  Logging: {} ({:?})",
        config.logging.level, config.logging.format
    );
    println!(
        "  Timeouts: connect {}s, request {}s",
        config.timeouts.connect_secs, config.timeouts.request_secs
    );
}
