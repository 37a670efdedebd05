//! cinelog-api server binary.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinelog_api::{router, ApiConfig, AppState, LogConfig, LogFormat};
use cinelog_db::Database;

/// Install the global subscriber. The returned guard must live until exit
/// so buffered file output is flushed.
fn init_logging(log: &LogConfig) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cinelog_api=debug,cinelog_db=info,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    if let Some(ref path) = log.file {
        let path = std::path::Path::new(path);
        let file_dir = path.parent().unwrap_or(std::path::Path::new("."));
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("cinelog-api.log");
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        match log.format {
            LogFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init(),
            LogFormat::Text => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(log.ansi.unwrap_or(false)),
                )
                .init(),
        }
        Some(guard)
    } else {
        match log.format {
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json())
                .init(),
            LogFormat::Text => {
                let mut layer = tracing_subscriber::fmt::layer();
                if let Some(ansi) = log.ansi {
                    layer = layer.with_ansi(ansi);
                }
                registry.with(layer).init();
            }
        }
        None
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;
    let _file_guard = init_logging(&config.log);

    info!(
        log_format = ?config.log.format,
        log_file = config.log.file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    let db = Database::connect_with_config(&config.database_url, config.pool_config()).await?;

    info!("Running database migrations");
    db.migrate().await?;

    let app = router(AppState::new(db), &config);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "cinelog-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
