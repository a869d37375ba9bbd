//! HTTP server
//!
//! Serves a form where a URL can be submitted and answers with the rendered
//! analysis of that page.
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /` | URL form |
//! | `POST /` | Analyze the submitted `url` field |
//! | `GET /health` | Liveness probe |

mod handlers;
mod validate;

pub use handlers::{analyze_url, health, show_form, AnalyzeForm, HttpError};
pub use validate::validate_url;

use crate::analyzer::Analyzer;
use crate::config::Config;
use crate::download::PageDownloader;
use crate::AnalyzerError;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub downloader: Arc<PageDownloader>,
    /// Cancelled on shutdown; parent of every analysis deadline
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Builds the state from configuration
    pub fn from_config(config: &Config) -> Result<Self, AnalyzerError> {
        Ok(Self {
            analyzer: Arc::new(Analyzer::from_config(&config.analyzer)?),
            downloader: Arc::new(PageDownloader::from_config(&config.analyzer)?),
            shutdown: CancellationToken::new(),
        })
    }
}

/// Builds the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(analyze_url))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the server until Ctrl-C or SIGTERM
///
/// In-flight analyses are cancelled when the shutdown signal arrives; their
/// pending probes count as inaccessible and the responses still complete.
pub async fn serve(config: &Config) -> Result<(), AnalyzerError> {
    let state = AppState::from_config(config)?;
    let shutdown = state.shutdown.clone();

    let address = config.http_server.address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Starting HTTP server on {}", address);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutting down HTTP server gracefully...");
            shutdown.cancel();
        })
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
}
