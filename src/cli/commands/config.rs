use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::missing_fields;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        init,
        force,
    } = cmd
    {
        let path = Config::config_file();

        // ---- INIT ----
        if *init {
            Config::init_file(*force)?;
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}, defaults are in use",
                    path.display()
                ));
                return Ok(());
            }

            let missing = missing_fields(&fs::read_to_string(&path)?)?;
            if missing.is_empty() {
                success("Configuration file is complete");
            } else {
                for field in missing {
                    info(format!("'{field}' not set, using default"));
                }
            }
        }
    }

    Ok(())
}
