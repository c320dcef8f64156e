//! parley: chat forwarding service.
//!
//! Accepts `POST /api/chat`, forwards the message to a Gemini conversation,
//! and returns the reply. The provider key comes from `GEMINI_API_KEY`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use parley_ai::{GeminiClient, GeminiConfig};
use parley_common::{ParleyError, Result};
use parley_config::{config_to_json, ParleyConfig};
use parley_server::{logging, router, AppState, SessionRegistry};
use tokio::net::TcpListener;
use tracing_subscriber::util::SubscriberInitExt;

const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Parser)]
#[command(name = "parley", about = "Chat forwarding service for hosted language models")]
struct Args {
    /// Path to a config file (defaults to the platform config directory).
    #[arg(short, long, env = "PARLEY_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to listen on.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on.
    #[arg(short, long)]
    port: Option<u16>,

    /// Log filter directive, e.g. `parley=debug`.
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before reading any environment
    dotenvy::dotenv().ok();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("parley: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let (subscriber, log_level) = logging::subscriber(
        std::env::var("RUST_LOG").ok(),
        args.log_level.as_deref(),
        std::io::stderr,
    );
    subscriber.init();

    let mut config = parley_config::load_config(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if args.print_config {
        println!("{}", config_to_json(&config));
        return Ok(());
    }

    log_level.apply_config(config.logging.level);

    let api_key = std::env::var(API_KEY_VAR)
        .ok()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| ParleyError::Credential(format!("{API_KEY_VAR} is not set")))?;

    let client = build_client(api_key, &config)?;
    tracing::info!(config = ?client.config(), "Provider configured");

    let sessions = SessionRegistry::new(
        config.provider.system_prompt.clone(),
        config.sessions.max_sessions as usize,
    );
    sessions.spawn_reaper(
        Duration::from_secs(config.sessions.idle_ttl_secs),
        Duration::from_secs(config.sessions.reap_interval_secs),
    );

    let state = AppState::new(Arc::new(client), sessions);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("parley listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ParleyError::Server(e.to_string()))?;

    tracing::info!("parley stopped");
    Ok(())
}

fn build_client(api_key: String, config: &ParleyConfig) -> Result<GeminiClient> {
    let provider = &config.provider;
    let gemini = GeminiConfig::new(api_key)
        .with_model(&provider.model)
        .with_base_url(&provider.base_url)
        .with_max_tokens(provider.max_tokens)
        .with_temperature(provider.temperature)
        .with_timeout(Duration::from_secs(provider.timeout_secs.into()));
    GeminiClient::new(gemini).map_err(|e| ParleyError::Ai(e.to_string()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
