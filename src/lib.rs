pub mod cli;
pub mod config;
pub mod normalizer;
pub mod roster;

use anyhow::{Context, Result};
use env_logger::Env;
use log::debug;
use serde::Serialize;

use cli::{Cli, Commands, ConfigActions};

/// JSON view of a roster record with its average
#[derive(Serialize)]
struct RosterEntry<'a> {
    #[serde(flatten)]
    record: &'a StudentRecord,
    average: f64,
}

pub fn init_logger(default_level: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Load the configuration named on the command line, or the user's one
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

pub fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Normalize { input, output } => {
            let output = output.unwrap_or_else(|| config.derive_output_path(&input));
            let summary = normalize_times(&input, &output)
                .with_context(|| format!("Failed to normalize {}", input.display()))?;
            println!("{} -> {}: {}", input.display(), output.display(), summary);
        }
        Commands::Line { text } => {
            println!("{}", rewrite_line(&text.join(" ")));
        }
        Commands::Roster { file, json } => {
            let roster = load_roster(&file)?;
            if json {
                let records: Vec<RosterEntry> = roster
                    .values()
                    .map(|record| RosterEntry { record, average: record.average() })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                let precision = config.roster.average_precision;
                for record in roster.values() {
                    println!("{}\t{}\t{:.*}", record.id, record.name, precision, record.average());
                }
            }
        }
        Commands::Config { action } => match action {
            ConfigActions::Show => {
                print!("{}", toml::to_string_pretty(config)?);
            }
            ConfigActions::Path => {
                let path = match cli.config {
                    Some(path) => path,
                    None => config::get_config_path()?,
                };
                println!("{}", path.display());
            }
        },
    }

    debug!("Command finished");
    Ok(())
}

// Re-export commonly used types
pub use config::Config;
pub use normalizer::{normalize_reader, normalize_times, rewrite_line, CanonicalTime, NormalizeError, NormalizeSummary};
pub use roster::{load_roster, RosterError, StudentRecord};
