//! SharedNotes HTTP server.
//!
//! ```sh
//! sharednotes            # port from config.toml / SHAREDNOTES_SERVER_PORT
//! sharednotes 3000       # or PORT=3000 sharednotes
//! ```

use std::sync::Arc;

use anyhow::Context;
use api::{db, PgStore, Settings};
use clap::Parser;
use tokio::{net::TcpListener, signal::ctrl_c};
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tower_sessions_sqlx_store::PostgresStore;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod app;
mod error;
mod forms;
mod routes;
mod session;

use app::AppState;

#[derive(Parser, Debug)]
#[command(name = "sharednotes", about = "Multi-user note sharing server")]
struct Cli {
    /// Port to listen on, overriding the configured one.
    #[arg(env = "PORT")]
    port: Option<u16>,

    /// Settings file.
    #[arg(long, default_value = "config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::from_file(&cli.config).context("loading settings")?;
    if let Some(port) = cli.port {
        settings.server.port = port;
    }

    let pool = db::connect(&settings.database)
        .await
        .context("connecting to PostgreSQL")?;
    db::migrate(&pool).await.context("running migrations")?;

    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("creating the session table")?;

    let state = AppState::new(Arc::new(PgStore::new(pool.clone())));
    let app = app::router(state, session_store, &settings);

    let address = settings.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding to {address}"))?;
    info!("Listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Closing database connections");
    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
