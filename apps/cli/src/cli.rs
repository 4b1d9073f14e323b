use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_HISTORY_LIMIT: usize = 12;

#[derive(Debug, Parser)]
#[command(name = "opendict", version, about = "Spanish dictionary lookups and vocabulary quiz")]
pub struct Cli {
    /// Base URL of the opendict backend
    #[arg(long, env = "OPENDICT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Path to the local SQLite database
    #[arg(long, env = "OPENDICT_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a word and cache the result
    Search {
        #[arg(required = true, num_args = 1..)]
        word: Vec<String>,
    },
    /// Show a cached entry without going online
    Show { word: String },
    /// Cached words, most recent first
    History {
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },
    /// Recent searches
    Recents,
    /// Multiple-choice quiz over cached words
    Play,
    /// Play statistics
    Stats,
}
