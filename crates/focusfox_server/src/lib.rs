//! FocusFox API server library
//!
//! Stateless HTTP front end for the planner in `focusfox-core`.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};

/// Build the application router with CORS and request tracing applied
pub fn app(config: &ServerConfig) -> ServerResult<Router> {
    Ok(handlers::routes()
        .layer(middleware::cors_layer(&config.cors)?)
        .layer(TraceLayer::new_for_http()))
}

/// Start the FocusFox API server and run until Ctrl-C
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    use std::net::SocketAddr;

    tracing::info!("Starting FocusFox API Server on {}", config.bind_address);

    let app = app(&config)?;

    // Parse address
    let addr: SocketAddr = config.bind_address.parse()?;

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down FocusFox API Server");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
