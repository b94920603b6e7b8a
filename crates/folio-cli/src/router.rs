//! Command routing logic for CLI

use crate::args::{Cli, Commands, ConfigAction};
use crate::{commands, logging};
use folio_core::config::load_config;
use folio_core::error::FolioResult;

/// Load configuration, install logging and dispatch the subcommand
pub async fn route(cli: Cli) -> FolioResult<()> {
    let bootstrap = logging::bootstrap_subscriber(
        logging::env_filter(cli.log_level.as_deref().unwrap_or("warn")),
        std::io::stderr,
    );
    let config = tracing::subscriber::with_default(bootstrap, || {
        load_config(cli.config_file.as_deref(), cli.overrides())
    })?;
    logging::init(&config.logging);

    tracing::debug!(
        config_file = ?cli.config_file,
        chain_len = config.failover.chain.len(),
        "Configuration loaded"
    );

    match cli.command {
        None | Some(Commands::Serve { .. }) => commands::serve::run(&config).await,
        Some(Commands::Chat) => commands::chat::run(&config).await,
        Some(Commands::Ask { question }) => commands::ask::run(&config, &question.join(" ")).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config, cli.config_file.as_deref()),
            ConfigAction::Validate => commands::config::validate(&config),
        },
    }
}
