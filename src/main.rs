use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aelus::{
    api::create_router,
    application::builder::ApplicationBuilder,
    config::{Config, LogFormat},
};

const RATE_LIMIT_CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

fn init_tracing(config: &Config) {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    init_tracing(&config);

    info!(service = %config.app_name, version = %config.app_version, "Starting Aelus API");

    config.validate()?;
    info!("Configuration loaded and validated");

    let listen_addr = config.listen_addr();
    let state = ApplicationBuilder::new(config)
        .with_parsers()
        .with_rate_limiter()
        .build()?;

    // Resolve the configured parser up front so misconfiguration shows in the startup log
    match state
        .config
        .parser_kind()
        .map(|kind| state.parsers.get(kind))
    {
        Ok(Ok(parser)) => info!(parser = parser.name(), "Parser backend ready"),
        Ok(Err(e)) => error!(error = %e, "Parser backend unavailable"),
        Err(e) => error!(error = %e, "Invalid parser configuration"),
    }

    if let Some(limiter) = &state.rate_limiter {
        limiter.spawn_cleanup(RATE_LIMIT_CLEANUP_INTERVAL);
    }

    let app = create_router(state);

    info!("Listening on {}", listen_addr);
    let listener = TcpListener::bind(&listen_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Shutting down Aelus API");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
