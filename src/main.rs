mod backend;
mod config;
mod error;
mod protocol;
mod server;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use backend::{Backend, Placeholder};
use config::Config;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    dotenvy::dotenv().ok();

    let config = Config::parse();

    // Configure logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::fmt().json().with_env_filter(filter).init();
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }

    let backend: Arc<dyn Backend> = Arc::new(Placeholder::new());
    info!(
        backend = backend.name(),
        models = backend.models().len(),
        "using backend"
    );

    let addr = config.listen_addr();
    let port = config.port;
    let environment = config.environment.clone();

    let app = server::build_router(config, backend);

    let listener = TcpListener::bind(&addr).await.unwrap_or_else(|e| {
        error!(addr = addr, error = %e, "failed to bind");
        std::process::exit(1);
    });

    info!(addr = addr, environment = environment, "AIMCS Backend API running");
    info!("health check: http://localhost:{port}/health");
    info!("API docs: http://localhost:{port}/api");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .unwrap_or_else(|e| {
        error!(error = %e, "server error");
        std::process::exit(1);
    });

    info!("server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl+c");
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
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
