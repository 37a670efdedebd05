//! Movie tag handlers.

use axum::{
    extract::{Path, State},
    Json,
};

use cinelog_core::{MovieTagRepository, TagSummary};

use crate::error::ApiError;
use crate::AppState;

/// Distinct tag names a user has used, with note counts.
#[utoipa::path(
    get,
    path = "/api/v1/movie_tags/{user_id}",
    tag = "Movie Tags",
    params(("user_id" = i64, Path, description = "Owning user")),
    responses((status = 200, description = "Tag names in use", body = [TagSummary]))
)]
pub async fn list_user_tags(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<TagSummary>>, ApiError> {
    let tags = state.db.tags.summarize_for_user(user_id).await?;
    Ok(Json(tags))
}
