//! tyd-http — HTTP surface for the lookup engine.
//!
//! A deliberately thin adapter: one search route, one health route, CORS
//! and request tracing layers. All lookup semantics live in `tyd-core`;
//! this crate only translates query parameters in and status codes out.
//!
//! # Endpoints
//!
//! - `GET /api/search?input=Q` — prefix lookup, returns
//!   `{"results": [...], "duration": <ms>}`
//! - `GET /api/health` — liveness probe

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tyd_core::{ErrorKind, LookupEngine, TermBackend};

/// Query string for `/api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub input: Option<String>,
}

/// Successful search payload: matching terms plus elapsed milliseconds.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchBody {
    pub results: Vec<String>,
    pub duration: f64,
}

/// Error payload for every non-200 response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Build the application router around a shared engine handle.
pub fn router<B: TermBackend + 'static>(engine: LookupEngine<B>) -> Router {
    Router::new()
        .route("/api/search", get(handle_search::<B>))
        .route("/api/health", get(handle_health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

/// Bind and serve until the process is stopped.
pub async fn serve(listen: SocketAddr, app: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen).await?;
    tracing::info!(address = %listen, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Handle `GET /api/search`.
async fn handle_search<B: TermBackend + 'static>(
    State(engine): State<LookupEngine<B>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let input = params.input.unwrap_or_default();
    if input.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "no input provided");
    }

    match engine.lookup(&input).await {
        Ok(lookup) => {
            let body = SearchBody {
                results: lookup.terms,
                duration: lookup.elapsed.as_secs_f64() * 1000.0,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            let status = match err.kind() {
                ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
                ErrorKind::TransientBackend if err.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
                ErrorKind::TransientBackend => StatusCode::BAD_GATEWAY,
            };
            if err.kind() == ErrorKind::TransientBackend {
                tracing::error!(error = %err, "backend failure during search");
            }
            error_response(status, &err.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// Liveness payload for `/api/health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub version: String,
}

/// Handle `GET /api/health`.
async fn handle_health() -> Response {
    Json(HealthBody {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
    .into_response()
}
