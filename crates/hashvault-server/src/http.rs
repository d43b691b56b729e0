//! HTTP surface: a thin axum layer mapping core operations onto routes.
//!
//! - `POST /hash` — accept a password, reply with its decimal ID
//! - `GET /hash/{id}` — reply with the stored digest
//! - `GET /stats` — request count and average handling latency
//! - `GET|POST /shutdown` — trigger graceful shutdown
//!
//! Error bodies are JSON `{"error": message}` with the core error's display
//! string carried verbatim.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use hashvault_core::{Error, HashService, StatsSnapshot};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: HashService,
    /// Cancelled by the shutdown endpoint; the serving loop watches it.
    pub shutdown: CancellationToken,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/hash", post(submit_hash))
        .route("/hash/{id}", get(get_hash))
        .route("/stats", get(get_stats))
        .route("/shutdown", get(request_shutdown).post(request_shutdown))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct HashForm {
    /// Absent fields are treated the same as an empty password.
    #[serde(default)]
    password: String,
}

/// JSON error body: `{"error": message}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Core error wrapped for axum. Client-reportable outcomes only; nothing
/// here is logged as a failure.
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::EmptyPassword => StatusCode::BAD_REQUEST,
            // Malformed tokens share the not-found status with missing IDs;
            // the body message tells them apart.
            Error::InvalidId { .. } | Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::ShuttingDown => StatusCode::SERVICE_UNAVAILABLE,
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

async fn submit_hash(
    State(state): State<AppState>,
    Form(form): Form<HashForm>,
) -> Result<String, ApiError> {
    let id = state.service.submit(&form.password)?;
    Ok(id.to_string())
}

async fn get_hash(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<String, ApiError> {
    Ok(state.service.lookup(&token)?)
}

async fn get_stats(State(state): State<AppState>) -> Json<StatsSnapshot> {
    Json(state.service.stats())
}

async fn request_shutdown(State(state): State<AppState>) -> StatusCode {
    info!("shutdown requested over HTTP");
    state.shutdown.cancel();
    StatusCode::OK
}
