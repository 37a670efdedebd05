//! Movie note handlers: create, show, delete, index.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use cinelog_core::defaults::MSG_RATING_OUT_OF_RANGE;
use cinelog_core::{
    parse_tag_filter, CreateMovieNoteRequest, ListMovieNotesRequest, MovieNoteRepository,
    MovieNoteWithTags,
};

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMovieNoteBody {
    /// Must not match any existing note title exactly.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Integer from 1 to 5.
    #[schema(value_type = i64)]
    pub rating: serde_json::Number,
    /// Tag names attached to the note.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Read a JSON rating as an integer.
///
/// Whole-valued floats such as `4.0` count as integers. Fractions and
/// numbers beyond `i64` are rejected with the out-of-range message, the same
/// answer as any other bad rating.
fn rating_value(rating: &serde_json::Number) -> Result<i64, ApiError> {
    if let Some(n) = rating.as_i64() {
        return Ok(n);
    }
    rating
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
        .map(|f| f as i64)
        .ok_or_else(|| ApiError::BadRequest(MSG_RATING_OUT_OF_RANGE.to_string()))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMovieNotesQuery {
    /// Owner of the notes to list.
    pub user_id: i64,
    /// Substring the title must contain (case-sensitive).
    #[serde(default)]
    pub title: String,
    /// Comma-separated tag names; a note matches if it has any of them.
    pub tags: Option<String>,
}

/// Create a movie note with its tags.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/movie_notes",
    tag = "Movie Notes",
    params(("user_id" = i64, Path, description = "Owning user")),
    request_body = CreateMovieNoteBody,
    responses(
        (status = 201, description = "Movie note created"),
        (status = 400, description = "Rating outside 1..=5"),
        (status = 409, description = "Title already registered")
    )
)]
pub async fn create_movie_note(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(body): Json<CreateMovieNoteBody>,
) -> Result<impl IntoResponse, ApiError> {
    let req = CreateMovieNoteRequest {
        rating: rating_value(&body.rating)?,
        title: body.title,
        description: body.description,
        tags: body.tags,
        user_id,
    };

    let note_id = state.db.notes.insert(req).await?;

    info!(
        subsystem = "api",
        component = "movie_notes",
        op = "create",
        note_id,
        user_id,
        "Movie note created"
    );
    Ok(StatusCode::CREATED)
}

/// Fetch a movie note with its tags sorted by name.
#[utoipa::path(
    get,
    path = "/api/v1/movie_notes/{id}",
    tag = "Movie Notes",
    params(("id" = i64, Path, description = "Movie note id")),
    responses(
        (status = 200, description = "Movie note with tags", body = MovieNoteWithTags),
        (status = 404, description = "No movie note with this id")
    )
)]
pub async fn get_movie_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MovieNoteWithTags>, ApiError> {
    let note = state.db.notes.fetch(id).await?;
    Ok(Json(note))
}

/// Delete a movie note and its tags. Unknown ids succeed silently.
#[utoipa::path(
    delete,
    path = "/api/v1/movie_notes/{id}",
    tag = "Movie Notes",
    params(("id" = i64, Path, description = "Movie note id")),
    responses((status = 204, description = "Movie note deleted or absent"))
)]
pub async fn delete_movie_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.notes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a user's movie notes ordered by title, each with its tags.
#[utoipa::path(
    get,
    path = "/api/v1/movie_notes",
    tag = "Movie Notes",
    params(ListMovieNotesQuery),
    responses((status = 200, description = "Matching movie notes", body = [MovieNoteWithTags]))
)]
pub async fn list_movie_notes(
    State(state): State<AppState>,
    Query(query): Query<ListMovieNotesQuery>,
) -> Result<Json<Vec<MovieNoteWithTags>>, ApiError> {
    let req = ListMovieNotesRequest {
        user_id: query.user_id,
        title: query.title,
        tags: query.tags.as_deref().map(parse_tag_filter),
    };

    let notes = state.db.notes.list(req).await?;
    Ok(Json(notes))
}
