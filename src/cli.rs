use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// assigntui - edit package assignment settings from the terminal
#[derive(Parser)]
#[command(name = "assigntui")]
#[command(about = "A terminal-based editor for package assignment settings")]
#[command(version)]
pub struct Cli {
    /// Path to the assignment settings file.
    ///
    /// Created on first save if it does not exist yet.
    #[arg(long, global = true, default_value = "assignment.json")]
    pub settings: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Edit the enabled configuration types for a category
    Edit {
        /// Category to edit (e.g. core)
        category: String,

        /// Enable these type ids and save without the interactive form
        #[arg(long)]
        enable: Vec<String>,

        /// Disable these type ids and save without the interactive form
        #[arg(long)]
        disable: Vec<String>,

        /// Force headless mode even with no --enable/--disable
        /// (saves an empty selection)
        #[arg(long)]
        batch: bool,
    },
    /// Show the current selection for a category
    Show {
        /// Category to display
        category: String,
    },
    /// List the known categories
    Categories,
    /// Validate a settings file against the catalog
    Validate {
        /// File to validate (defaults to --settings)
        file: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
