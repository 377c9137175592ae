use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Horario - normalize Spanish time expressions to 24-hour HH:MM
#[derive(Debug, Parser)]
#[command(name = "horario")]
#[command(about = "Normalize Spanish time expressions to 24-hour HH:MM", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read configuration from this file instead of the user config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log every rewritten and rejected expression
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize every time expression in a text file
    #[command(alias = "norm")]
    Normalize {
        /// Input text file (UTF-8)
        input: PathBuf,

        /// Output file; derived from the input name when omitted
        output: Option<PathBuf>,
    },

    /// Normalize a single line of text and print it
    Line {
        /// Text to normalize
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Print a student roster with averages
    #[command(alias = "alumnos")]
    Roster {
        /// Roster file: identifier, name and grades per line
        file: PathBuf,

        /// Print the roster as JSON
        #[arg(long)]
        json: bool,
    },

    /// View configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Show the effective configuration
    Show,

    /// Print the configuration file location
    Path,
}
