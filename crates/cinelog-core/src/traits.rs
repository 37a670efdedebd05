//! Repository traits for cinelog storage backends.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// MOVIE NOTE REPOSITORY
// =============================================================================

/// Repository for movie notes and the tags written alongside them.
#[async_trait]
pub trait MovieNoteRepository: Send + Sync {
    /// Insert a note and its tags.
    ///
    /// Fails with `Error::InvalidInput` for an out-of-range rating and with
    /// `Error::Conflict` when the title is already taken. Nothing is written
    /// on failure.
    async fn insert(&self, req: CreateMovieNoteRequest) -> Result<i64>;

    /// Fetch a note with its tags ordered by name.
    ///
    /// Fails with `Error::NotFound` when no note has this id.
    async fn fetch(&self, id: i64) -> Result<MovieNoteWithTags>;

    /// List a user's notes ordered by title, each with its tags.
    async fn list(&self, req: ListMovieNotesRequest) -> Result<Vec<MovieNoteWithTags>>;

    /// Delete a note and, through the schema, its tags. Missing ids are a no-op.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Check whether a note with this exact title exists.
    async fn title_exists(&self, title: &str) -> Result<bool>;
}

// =============================================================================
// MOVIE TAG REPOSITORY
// =============================================================================

/// Read access to movie tags.
#[async_trait]
pub trait MovieTagRepository: Send + Sync {
    /// Tags of a single note, ordered by name.
    async fn get_for_note(&self, note_id: i64) -> Result<Vec<MovieTag>>;

    /// Every tag owned by a user, ordered by name then id.
    async fn get_for_user(&self, user_id: i64) -> Result<Vec<MovieTag>>;

    /// Distinct tag names a user has used, with note counts, ordered by name.
    async fn summarize_for_user(&self, user_id: i64) -> Result<Vec<TagSummary>>;
}
