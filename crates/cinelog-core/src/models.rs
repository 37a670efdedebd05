//! Data models for movie notes and their tags.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// STORED ROWS
// =============================================================================

/// A recorded movie entry owned by a user (`movie_notes` row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct MovieNote {
    pub id: i64,
    /// Unique across all notes, compared case-sensitively.
    pub title: String,
    pub description: String,
    /// Inclusive range 1..=5.
    pub rating: i32,
    pub user_id: i64,
    pub created_at_utc: DateTime<Utc>,
}

/// A free-text label attached to exactly one note (`movie_tags` row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct MovieTag {
    pub id: i64,
    pub note_id: i64,
    /// Copy of the user that created the parent note.
    pub user_id: i64,
    pub name: String,
}

/// A tag name in use by a user, with the number of notes carrying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct TagSummary {
    pub name: String,
    pub note_count: i64,
}

// =============================================================================
// PROJECTIONS
// =============================================================================

/// A movie note with its tags embedded, as returned by `show` and `index`.
///
/// Serializes flat: the note's fields followed by a `tags` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieNoteWithTags {
    #[serde(flatten)]
    pub note: MovieNote,
    pub tags: Vec<MovieTag>,
}

impl MovieNoteWithTags {
    pub fn new(note: MovieNote, tags: Vec<MovieTag>) -> Self {
        Self { note, tags }
    }
}

/// Attach tags to their notes by `note_id`.
///
/// Notes keep their input order. Each note receives the tags whose `note_id`
/// matches, in the order they appear in `tags`. Tags without a matching note
/// are dropped.
pub fn attach_tags(notes: Vec<MovieNote>, tags: Vec<MovieTag>) -> Vec<MovieNoteWithTags> {
    let mut by_note: HashMap<i64, Vec<MovieTag>> = HashMap::new();
    for tag in tags {
        by_note.entry(tag.note_id).or_default().push(tag);
    }

    notes
        .into_iter()
        .map(|note| {
            let tags = by_note.remove(&note.id).unwrap_or_default();
            MovieNoteWithTags::new(note, tags)
        })
        .collect()
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Request for creating a movie note together with its tags.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMovieNoteRequest {
    pub title: String,
    pub description: String,
    /// Unchecked; narrowed to the stored `i32` by `validate_rating`.
    pub rating: i64,
    pub tags: Vec<String>,
    pub user_id: i64,
}

/// Request for listing a user's movie notes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListMovieNotesRequest {
    pub user_id: i64,
    /// Substring the title must contain. Empty matches every title.
    pub title: String,
    /// Keep only notes carrying at least one of these tag names.
    pub tags: Option<Vec<String>>,
}

impl ListMovieNotesRequest {
    /// Tag names to filter on, or `None` when no tag filter applies.
    pub fn tag_filter(&self) -> Option<&[String]> {
        self.tags.as_deref().filter(|tags| !tags.is_empty())
    }
}
