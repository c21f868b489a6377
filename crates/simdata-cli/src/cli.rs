//! CLI argument definitions for simdata.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "simdata")]
#[command(
    about = "Refreshes data_files using SimulationCraft's casc and dbc extractors",
    version
)]
pub struct Args {
    /// Absolute path to your local SimulationCraft checkout
    #[arg(short, long, value_name = "PATH")]
    pub simc: Option<PathBuf>,

    /// Save location for fetched and compiled DB files
    #[arg(short, long, value_name = "PATH", default_value = "tmp")]
    pub output: PathBuf,

    /// Absolute path to your World of Warcraft installation, to get hotfixes
    #[arg(short, long, value_name = "PATH")]
    pub wow: Option<PathBuf>,

    /// Disable download from the CDN; only already present local files are used
    #[arg(long)]
    pub no_load: bool,

    /// Disable extraction from db2 files; only already compiled files are used
    #[arg(long)]
    pub no_extract: bool,

    /// Download PTR files
    #[arg(long, conflicts_with = "beta")]
    pub ptr: bool,

    /// Download beta files
    #[arg(long)]
    pub beta: bool,

    /// Per-subprocess time limit in seconds (0 disables the limit)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full refresh: fetch content, then rebuild the trinket artifact
    Refresh,
    /// Fetch per-locale game content from the CDN
    Fetch,
    /// Extract db2 tables to compiled JSON
    Extract {
        /// Table names to extract (e.g. ItemSparse)
        #[arg(required = true)]
        tables: Vec<String>,
    },
    /// Rebuild data_files/trinkets.json from already compiled tables
    Trinkets,
}
