use award_intervals::analyzer::IntervalAnalyzer;
use award_intervals::bootstrap::load_dataset;
use award_intervals::config::{AppConfig, load_config};
use award_intervals::storage::{MovieStore, SqliteStorage};
use award_intervals::{AppState, build_router};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Panic occurred: {}", panic_info);
    }));

    let Some(config) = resolve_config() else {
        return ExitCode::FAILURE;
    };

    // Initialize storage (SQLite) with async access (wrapped in a Mutex)
    let storage = match SqliteStorage::new(&config.database_path) {
        Ok(s) => Arc::new(Mutex::new(s)),
        Err(e) => {
            error!("Failed to initialize storage: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let store: Arc<dyn MovieStore> = storage;

    if let Some(dataset) = &config.dataset_path {
        let path = Path::new(dataset);
        if !path.exists() {
            warn!("Dataset {} not found, starting with an empty store", path.display());
        } else {
            // load_config has already validated the delimiter
            let delimiter = config.csv_delimiter_byte().unwrap_or(b';');
            if let Err(e) = load_dataset(store.as_ref(), path, delimiter).await {
                error!("Failed to load dataset {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    }

    let analyzer = IntervalAnalyzer::with_record_limit(config.max_analysis_records);
    let app = build_router(AppState::new(store, analyzer));

    let listener = match tokio::net::TcpListener::bind(&config.bind_address).await {
        Ok(l) => l,
        Err(e) => {
            error!("Cannot bind {}: {}", config.bind_address, e);
            return ExitCode::FAILURE;
        }
    };
    info!("Listening on http://{}", config.bind_address);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Shut down cleanly");
    ExitCode::SUCCESS
}

/// Config path is the first argument, or `config.json`. A missing default
/// file means defaults; a missing explicit file is an error.
fn resolve_config() -> Option<AppConfig> {
    let explicit = std::env::args().nth(1);
    let path = explicit.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

    if explicit.is_none() && !Path::new(path).exists() {
        info!("No {} found, using default configuration", path);
        return Some(AppConfig::default());
    }

    match load_config(path) {
        Ok(cfg) => {
            info!("Loaded configuration from {}", path);
            Some(cfg)
        }
        Err(e) => {
            error!("Config load error ({}): {}", path, e);
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
