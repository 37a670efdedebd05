//! HTTP handlers for cinelog-api.

pub mod notes;
pub mod tags;

use axum::{extract::State, response::IntoResponse, Json};

use crate::AppState;

pub use notes::{create_movie_note, delete_movie_note, get_movie_note, list_movie_notes};
pub use tags::list_user_tags;

/// Liveness probe. Also logs connection pool health.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    cinelog_db::log_pool_metrics(state.db.pool());
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
