//! Liveness endpoint.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tavern_db::repositories::CharacterRepo;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the store answered, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of stored characters, absent when the store is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<i64>,
}

/// GET /health
///
/// Counting characters exercises the migrated schema, not just the
/// connection, so a missing table reports as degraded.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let characters = CharacterRepo::count(&state.pool)
        .await
        .inspect_err(|err| tracing::warn!(error = %err, "Health check could not reach the store"))
        .ok();
    let db_healthy = characters.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        characters,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
