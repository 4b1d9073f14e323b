//! Terminal client: dictionary lookups through the backend, a local cache and
//! a vocabulary quiz.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod render;
pub mod state;

use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::config::ClientConfig;
use crate::state::AppState;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "opendict_cli=warn,opendict_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing();

    let config = ClientConfig::resolve(&cli)?;
    let mut state = AppState::from_config(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Search { word } => {
            commands::search(&state.store, &state.client, &word.join(" "), &mut out).await?
        }
        Command::Show { word } => commands::show(&state.store, &word, &mut out)?,
        Command::History { limit } => commands::history(&state.store, limit, &mut out)?,
        Command::Recents => commands::recents(&state.store, &mut out)?,
        Command::Play => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            commands::play(&mut state.store, &mut input, &mut out, &mut rand::rng())?
        }
        Command::Stats => commands::stats(&state.store, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
