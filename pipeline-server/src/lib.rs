//! Pipeline Server
//!
//! HTTP front end for [`pipeline_core`]. It exposes:
//!
//! - `GET /`: liveness check, `{"Ping": "Pong"}`
//! - `POST /pipelines/parse`: validate a `{nodes, edges}` body and answer
//!   `{"num_nodes", "num_edges", "is_dag"}`
//! - `POST /`: same as `/pipelines/parse`
//!
//! Cross-origin requests are limited to the origins in [`ServerConfig`].
//!
//! # Example
//!
//! ```rust,no_run
//! use pipeline_server::{serve, ServerConfig};
//!
//! # async fn run() -> Result<(), pipeline_server::ServerError> {
//! serve(ServerConfig::default()).await
//! # }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod wire;

use std::future::Future;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use config::ServerConfig;
pub use error::{ApiError, ConfigError, ServerError};

/// Build the application router for `config`.
pub fn router(config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = config.cors_layer()?;

    Ok(Router::new()
        .route("/", get(routes::ping).post(routes::parse_pipeline))
        .route("/pipelines/parse", post(routes::parse_pipeline))
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Bind `config.bind` and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind).await?;
    serve_on(listener, &config, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_on<F>(
    listener: TcpListener,
    config: &ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(config)?;
    let addr = listener.local_addr()?;
    info!(
        %addr,
        origins = ?config.allowed_origins,
        "pipeline server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("pipeline server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(%err, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(%err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
