//! Trade Client Binary
//!
//! Loads the settings file, logs on the configured sessions and runs the
//! operator loop on stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin trade-client -- config/tradeclient.yaml
//! cargo run --bin trade-client -- --begin-string FIX.4.4
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Extra log filter directives
//! - Any `${VAR}` referenced by the settings file

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use trade_client::application::ports::InitiatorPort;
use trade_client::application::services::{Console, FieldPrompter, TradeClientApplication};
use trade_client::application::use_cases::{ActionController, VersionSelection};
use trade_client::infrastructure::config::{DEFAULT_CONFIG_PATH, TradeClientConfig, load_config};
use trade_client::infrastructure::session::LoopbackInitiator;
use trade_client::infrastructure::telemetry;

/// Interactive FIX trade client.
#[derive(Parser, Debug)]
#[command(name = "trade-client", version, about)]
struct Args {
    /// Settings file.
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Use this BeginString for every action instead of prompting.
    #[arg(long, value_name = "ID")]
    begin_string: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    load_dotenv();

    let config = load_config(&args.config)
        .with_context(|| format!("Error reading settings {}", args.config.display()))?;
    telemetry::init(&config.logging).context("Error creating log")?;

    tracing::info!("Starting Trade Client");
    log_config(&args, &config);

    let config = Arc::new(config);
    let console = Console::stdout();
    let app = Arc::new(TradeClientApplication::new(console.clone()));
    let initiator = Arc::new(LoopbackInitiator::new(app, config.session_ids()));

    initiator
        .start()
        .await
        .context("Unable to start initiator")?;

    let selection = args
        .begin_string
        .map_or(VersionSelection::Prompt, VersionSelection::Fixed);
    let controller = ActionController::new(Arc::clone(&initiator), Arc::clone(&config), selection);

    let exit = tokio::task::spawn_blocking(move || {
        let mut prompter = FieldPrompter::new(std::io::stdin().lock(), console);
        controller.run(&mut prompter)
    })
    .await
    .context("Operator loop terminated abnormally")?;

    tracing::info!(?exit, "Operator loop ended");
    initiator.stop().await;

    Ok(())
}

/// Load .env from the current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Log the parsed configuration.
fn log_config(args: &Args, config: &TradeClientConfig) {
    tracing::info!(
        settings = %args.config.display(),
        sessions = config.sessions.len(),
        begin_string = args.begin_string.as_deref().unwrap_or("prompt"),
        "Configuration loaded"
    );
    for session in config.session_ids() {
        tracing::debug!(session = %session, "Session configured");
    }
}
