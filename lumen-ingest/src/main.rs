use std::path::PathBuf;

use axum::routing::get;
use clap::Parser;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use lumen_ingest::{AppState, api, config::Config, sink::TracingSink};

#[derive(Parser)]
#[command(name = "lumen-ingest")]
#[command(about = "Lumen telemetry ingest server")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "lumen-ingest.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "tracing=info,lumen_ingest=info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let cli = Cli::parse();

    let config = if cli.config.exists() {
        info!(path = ?cli.config, "Loading configuration");
        Config::load(&cli.config)?
    } else {
        info!("No configuration file found, using defaults");
        Config::default()
    };

    info!(sensor_config = ?config.sensor, "server started");

    let state = AppState {
        sensor_config: config.sensor,
        sink: TracingSink,
    };

    let app = api::router()
        .route("/health", get(health_handler))
        .with_state(state);

    let listener = TcpListener::bind(config.server.http_addr).await?;
    info!(http_addr = %config.server.http_addr, "HTTP server listening");

    let cancel = CancellationToken::new();

    let cancel_clone = cancel.clone();
    tokio::select! {
        result = axum::serve(listener, app).with_graceful_shutdown(async move {
            cancel_clone.cancelled().await;
        }) => {
            if let Err(e) = result {
                tracing::error!(error = ?e, "HTTP server error");
            }
            info!("HTTP server shut down");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
            cancel.cancel();
        }
    }

    info!("server exited");

    Ok(())
}

async fn health_handler() -> &'static str {
    "OK"
}
