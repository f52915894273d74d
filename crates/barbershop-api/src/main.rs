//! Barbershop REST service entry point.
//!
//! Binary name: `barbershop`
//!
//! Parses CLI arguments, loads the config file, opens the database (creating
//! the `barber` table if needed), then serves the REST API.

mod cli;
mod http;
mod state;

use clap::Parser;

use barbershop_infra::config::load_server_config;
use barbershop_infra::sqlite::pool::{DatabasePool, database_url};
use barbershop_observe::tracing_setup::{filter_for_verbosity, init_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.log_format)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let file_config = load_server_config(&cli.config).await;

    let command = cli.resolved_command();
    let config = cli.server.apply(file_config);

    match command {
        Commands::Serve => {
            let state = AppState::init(&config.database_path).await?;
            tracing::info!(database = %config.database_path, "database ready");

            let addr = format!("{}:{}", config.host, config.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "barbershop API listening");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("server stopped");
        }

        Commands::InitDb => {
            let pool = DatabasePool::new(&database_url(&config.database_path)).await?;
            pool.writer.close().await;
            pool.reader.close().await;
            tracing::info!(database = %config.database_path, "barber table ready");
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
