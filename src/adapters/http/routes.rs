//! HTTP surface: `GET /actions` backed by the ActionsPort.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{error, info};

use super::view::{ActionsDocument, ErrorDocument};
use crate::domain::DomainError;
use crate::ports::ActionsPort;

pub type SharedActions = Arc<dyn ActionsPort>;

// ── Error handling ────────────────────────────────────────────────────

/// Any fetch failure is a 500 with a JSON-API error document.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDocument::single(self.0.to_string())),
        )
            .into_response()
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn router(actions: SharedActions) -> Router {
    Router::new()
        .route("/actions", get(list_actions))
        .with_state(actions)
}

async fn list_actions(
    State(actions): State<SharedActions>,
) -> Result<Json<ActionsDocument>, ApiError> {
    let actions = actions.fetch_actions().await?;
    Ok(Json(ActionsDocument::from(actions)))
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: &str, app: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

// ── Tests ─────────────────────────────────────────────────────────────
