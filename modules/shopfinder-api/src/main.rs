use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shopfinder_api::build_router;
use shopfinder_common::Config;
use shopfinder_search::Dataset;

#[derive(Parser)]
#[command(name = "shopfinder-api", about = "Nearby popular products search API")]
struct Cli {
    /// Directory containing shops.csv, products.csv, tags.csv and taggings.csv
    #[arg(long)]
    data_path: Option<PathBuf>,

    /// Host to bind (overrides WEB_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides WEB_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // LOG_FORMAT=json for log shippers, human-readable otherwise
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(data_path) = cli.data_path {
        config.data_path = data_path;
    }
    if let Some(host) = cli.host {
        config.web_host = host;
    }
    if let Some(port) = cli.port {
        config.web_port = port;
    }

    let dataset = Dataset::load(&config.data_path).with_context(|| {
        format!(
            "Failed to load dataset from {}. Set DATA_PATH or pass --data-path <dir>",
            config.data_path.display()
        )
    })?;

    let app = build_router(Arc::new(dataset), &config.allowed_origins);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Shopfinder API listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received terminate signal, shutting down"),
    }
}
