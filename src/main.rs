mod app;
mod config;
mod routes;
mod types;
mod utils;
use std::process::ExitCode;

use clap::Parser;
use config::{Cli, STOPS_PATH};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utils::stops_loader::load_stops;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if config::is_fatal(&e) => {
            error!("Invalid port: {}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            // wrong argument count, --help and --version print and exit without serving
            if let Err(err) = e.print() {
                error!("Failed to print usage: {}", err);
            }
            return ExitCode::SUCCESS;
        }
    };

    let stops = match load_stops(STOPS_PATH) {
        Ok(stops) => stops,
        Err(e) => {
            error!("Failed to load {}: {}", STOPS_PATH, e);
            return ExitCode::FAILURE;
        }
    };

    let app = app::gen_app(stops);

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", cli.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind port {}: {}", cli.port, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Listening on port {}", cli.port);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Server stopped");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
