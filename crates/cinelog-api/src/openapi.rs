//! OpenAPI document served at `/openapi.json`.

use utoipa::OpenApi;

use cinelog_core::{MovieNote, MovieNoteWithTags, MovieTag, TagSummary};

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "cinelog API", description = "Movie notes with tags"),
    paths(
        handlers::health_check,
        handlers::notes::create_movie_note,
        handlers::notes::get_movie_note,
        handlers::notes::delete_movie_note,
        handlers::notes::list_movie_notes,
        handlers::tags::list_user_tags,
    ),
    components(schemas(
        MovieNote,
        MovieTag,
        MovieNoteWithTags,
        TagSummary,
        handlers::notes::CreateMovieNoteBody,
    )),
    tags(
        (name = "Movie Notes", description = "Create, show, list and delete movie notes"),
        (name = "Movie Tags", description = "Tag usage per user"),
        (name = "System", description = "Health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_movie_note_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/v1/movie_notes"));
        assert!(paths.contains_key("/api/v1/movie_notes/{id}"));
        assert!(paths.contains_key("/api/v1/users/{user_id}/movie_notes"));
        assert!(paths.contains_key("/api/v1/movie_tags/{user_id}"));
    }
}
