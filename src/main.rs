use std::fs;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use logdesk_core::app_state::build_app_state;
use logdesk_core::config::{AppConfig, StorageBackend};
use logdesk_core::routes::build_router;
use logdesk_core::seed::run_seed;
use logdesk_core::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    let _log_guard = init_tracing(&config);
    for w in &config.warnings {
        warn!("{w}");
    }

    if config.seed_sample_data {
        run_seed(&config)?;
        return Ok(());
    }

    if config.storage == StorageBackend::File {
        ensure_data_directory(&config);
    }

    let app = build_router(build_app_state(&config));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("🚀 Server running on {}", addr);
    match config.storage {
        StorageBackend::File => info!("📁 Log file location: {}", config.log_file.display()),
        StorageBackend::Memory => info!("🧠 Using in-memory log store"),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Creates the store's directory. Failure is logged, not fatal.
fn ensure_data_directory(config: &AppConfig) {
    let Some(dir) = config.log_file.parent() else {
        return;
    };
    if dir.as_os_str().is_empty() {
        return;
    }
    if let Err(e) = fs::create_dir_all(dir) {
        error!("Error creating data directory {:?}: {}", dir, e);
    }
}

/// Listen for SIGTERM and SIGINT (Ctrl+C).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, starting graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, starting graceful shutdown"),
    }
}
