mod cli;
mod config;
mod models;
mod prayer_times;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;
    let schedule = config.schedule().context("Building prayer schedule")?;

    match cli.command {
        Some(Commands::Times) => handlers::handle_times(&schedule, &config)?,
        Some(Commands::Next) => handlers::handle_next(&schedule)?,
        Some(Commands::Qibla) => handlers::handle_qibla(&config)?,
        Some(Commands::Date { offset }) => handlers::handle_date(offset)?,
        Some(Commands::Duas { category, query }) => {
            handlers::handle_duas(category.as_deref(), query.as_deref())?
        }

        // No subcommand → launch TUI
        None => {
            log::debug!("Launching TUI");
            tui::app::run(config, schedule)?;
            log::debug!("TUI closed");
        }
    }

    Ok(())
}
