use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// NutritionTable: randomized daily nutrition values around your targets.
#[derive(Parser, Debug)]
#[command(name = "nutrition_table")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the settings JSON file (defaults to the user config dir).
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive session: edit settings, generate, copy and export.
    Session,

    /// Show the saved settings.
    Show,

    /// Set one field, e.g. `set target.calories 2200` or `set days 5`.
    Set {
        /// Field key: days, target.<field> or error.<field>.
        field: String,

        /// New value. Non-numeric input is stored as 0.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Generate a table from the saved settings and print it as TSV.
    Generate {
        /// Seed for a reproducible table.
        #[arg(long)]
        seed: Option<u64>,

        /// Also copy the table to the clipboard.
        #[arg(long)]
        copy: bool,

        /// Also write the table to a CSV file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clear saved settings and restore defaults.
    Reset,
}

impl Default for Command {
    fn default() -> Self {
        Command::Session
    }
}
