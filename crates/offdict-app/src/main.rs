use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use offdict_dispatch::{HttpLookupClient, LookupDispatcher, LookupTarget};
use offdict_io::SystemSelection;
use tokio::io::BufReader;
use tokio::signal;

pub mod cli;
pub mod controller;
pub mod events;
pub mod logging;
pub mod state;
pub mod status;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command};
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    logging::init(config.log.debug)?;

    let state = Arc::new(AppState::new(config));

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    match cli.command {
        Command::Overlay => {
            let controller = AppController::new(state);
            let tasks = controller
                .spawn_overlay(BufReader::new(tokio::io::stdin()))
                .await?;
            controller.run(tasks, shutdown).await;
        }
        Command::Watch { stdin } => {
            let primary = state.config.read().await.selection.primary;
            let source =
                SystemSelection::new(primary).context("Failed to open system selection")?;

            let controller = AppController::new(state);
            let tasks = if stdin {
                controller
                    .spawn_release_watch(source, BufReader::new(tokio::io::stdin()))
                    .await?
            } else {
                controller.spawn_watch(source).await?
            };
            controller.run(tasks, shutdown).await;
        }
        Command::Lookup { text } => lookup_once(&state, &text).await?,
    }

    Ok(())
}

/// One-shot lookup; the raw response body goes to stdout
async fn lookup_once(state: &AppState, text: &str) -> anyhow::Result<()> {
    let target = {
        let config = state.config.read().await;
        LookupTarget::from(&config.lookup)
    };

    let dispatcher = LookupDispatcher::new(HttpLookupClient::new(), target);
    let Some(handle) = dispatcher.dispatch_text(text) else {
        tracing::warn!("Nothing to look up");
        return Ok(());
    };

    let response = handle
        .wait()
        .await
        .with_context(|| format!("Lookup of {text:?} failed"))?;
    tracing::debug!("Server answered {}", response.status);
    println!("{}", response.body);

    Ok(())
}
