pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use log::debug;
use std::path::PathBuf;

use crate::config;
use crate::utils::error::BoxResult;
use types::{Cli, Commands};

/// Run the command-line interface
pub fn run() -> BoxResult<()> {
    let cli = Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug, cli.quiet);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("./"));
    let config = config::load_config(&source, cli.config.clone())?;
    debug!("Content directory: {}", config.content_path().display());

    match &cli.command {
        Commands::Index { lang, newest_first, pretty } => {
            commands::handle_index_command(&config, lang.as_deref(), *newest_first, *pretty)
        }
        Commands::Inject { file, output } => {
            commands::handle_inject_command(&config, file, output.as_ref())
        }
        Commands::Watch { print } => commands::handle_watch_command(&config, *print),
        Commands::Rewrite { path, locale, search } => {
            commands::handle_rewrite_command(&config, path, locale.as_deref(), search)
        }
    }
}
