use std::io::stderr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use banking_api::api::{self, AppState};
use banking_api::config::{Settings, API_TITLE, API_VERSION};
use banking_api::engine::BankingEngine;
use banking_api::models::DatasetError;
use banking_api::storage::DatasetStore;

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: Positional arguments only, [data.csv] [log_level], both falling back to the environment
    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = Settings::from_env()?.with_args(&args);

    setup_logging(settings.log_level);
    info!("Starting {API_TITLE} v{API_VERSION}");

    let storage = Arc::new(DatasetStore::new());
    let engine = Arc::new(BankingEngine::new(storage).with_cache_capacity(settings.report_cache_capacity));

    let timer = Instant::now();
    match engine.load_dataset(&settings.data_path).await {
        Ok(count) => info!("Loaded {count} transactions in {:?}", timer.elapsed()),
        Err(DatasetError::NotFound { path }) => {
            warn!("Data file not found: {}. API will run without data.", path.display())
        }
        Err(cause) => error!("{cause}")
    }

    let app = api::app(AppState::new(engine));
    let addr = settings.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down {API_TITLE}");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(cause) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {cause}");
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout stays free for the server's own output, logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
