use crate::core::layout::OverflowPolicy;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for playweek
/// Weekly calendar of game sessions stored in a SQLite snapshot
#[derive(Parser)]
#[command(
    name = "playweek",
    version = env!("CARGO_PKG_VERSION"),
    about = "Show recorded game sessions as a weekly hour-by-hour calendar",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or another snapshot)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Grid,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the weekly calendar
    Week {
        #[arg(
            long,
            short,
            default_value_t = 0,
            help = "Weeks back from the current one (1 = last week)"
        )]
        offset: i64,

        #[arg(long, value_enum, default_value = "grid")]
        format: OutputFormat,

        #[arg(long, value_name = "FILE", help = "Write json/csv output to a file")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite --file without asking")]
        force: bool,

        #[arg(long, value_enum, help = "Override the configured overflow policy")]
        overflow: Option<OverflowPolicy>,
    },

    /// Show per-game detail for one day
    Day {
        /// Date to show (YYYY-MM-DD), default today
        date: Option<String>,
    },

    /// Print the color legend with weekly play time
    Legend {
        #[arg(long, short, default_value_t = 0)]
        offset: i64,
    },

    /// Inspect or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List fields missing from the configuration file")]
        check: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,

        #[arg(long, requires = "init", help = "Overwrite an existing file with --init")]
        force: bool,
    },
}
