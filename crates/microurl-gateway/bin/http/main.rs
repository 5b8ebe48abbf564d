mod cli;

use crate::cli::{LogFormatArg, StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use microurl_core::Repository;
use microurl_gateway::{App, AppState};
use microurl_shortener::{ShortenerService, ShortenerSettings};
use microurl_storage::{InMemoryRepository, SqliteRepository};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    init_tracing(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        micro_length = config.micro_length,
        max_attempts = config.max_attempts,
        "starting microurl gateway"
    );

    let settings = ShortenerSettings::builder()
        .micro_length(config.micro_length)
        .max_attempts(config.max_attempts)
        .build();

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(config.listen_addr, InMemoryRepository::new(), settings).await
        }
        StorageBackendArg::Sqlite => {
            let repository = SqliteRepository::connect(&config.database_url)
                .await
                .with_context(|| format!("opening database {}", config.database_url))?;
            run_server(config.listen_addr, repository, settings).await
        }
    }
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormatArg::Text => subscriber.init(),
        LogFormatArg::Json => subscriber.json().init(),
    }
}

async fn run_server<R: Repository>(
    listen_addr: SocketAddr,
    repository: R,
    settings: ShortenerSettings,
) -> anyhow::Result<()> {
    let service = ShortenerService::from_settings(repository, settings)?;
    let state = AppState::new(Arc::new(service));

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("binding {listen_addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
