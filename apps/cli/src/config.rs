use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use crate::cli::Cli;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const DB_DIR: &str = "opendict";
const DB_FILE: &str = "opendict.db";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub db_path: PathBuf,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Combine parsed flags (which already include environment overrides)
    /// with platform defaults.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let db_path = match &cli.db {
            Some(path) => path.clone(),
            None => default_db_path().context("no local data directory for the database")?,
        };

        Ok(Self {
            api_url: cli.api_url.trim_end_matches('/').to_string(),
            db_path,
            request_timeout: REQUEST_TIMEOUT,
        })
    }
}

pub fn default_db_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(DB_DIR).join(DB_FILE))
}
