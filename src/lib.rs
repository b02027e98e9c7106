//! playweek library root.
//! Exposes the CLI parser, the high-level run() function, and the modules
//! that load, shape and render a week of game sessions.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::io::IsTerminal;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let color = !cli.no_color && std::io::stdout().is_terminal();

    match &cli.command {
        Commands::Week { .. } => cli::commands::week::handle(&cli.command, cfg, color),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg, color),
        Commands::Legend { .. } => cli::commands::legend::handle(&cli.command, cfg, color),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    cfg.database = utils::path::expand_tilde(&cfg.database)
        .to_string_lossy()
        .to_string();
    log::debug!("using database {}", cfg.database);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
