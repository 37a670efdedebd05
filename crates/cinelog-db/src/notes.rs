//! Movie note repository implementation.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::{PgExecutor, Pool, Postgres, Transaction};
use tracing::{debug, info};

use cinelog_core::defaults::MSG_DUPLICATE_TITLE;
use cinelog_core::{
    attach_tags, normalize_tag_names, validate_rating, CreateMovieNoteRequest, Error,
    ListMovieNotesRequest, MovieNote, MovieNoteRepository, MovieNoteWithTags, Result,
};

use crate::escape_like;
use crate::tags::{fetch_for_note, fetch_for_user};

/// Unique constraint guarding note titles (see migrations).
const TITLE_CONSTRAINT: &str = "movie_notes_title_key";

const NOTE_COLUMNS: &str = "n.id, n.title, n.description, n.rating, n.user_id, n.created_at_utc";

/// PostgreSQL implementation of MovieNoteRepository.
#[derive(Clone)]
pub struct PgMovieNoteRepository {
    pool: Pool<Postgres>,
}

impl PgMovieNoteRepository {
    /// Create a new PgMovieNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Map an insert failure, turning a title unique violation into a conflict.
fn map_insert_error(err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.constraint() == Some(TITLE_CONSTRAINT) {
            return Error::Conflict(MSG_DUPLICATE_TITLE.to_string());
        }
    }
    Error::Database(err)
}

/// Build the base note query for a listing.
///
/// Binds: `$1` user id, `$2` LIKE pattern, `$3` tag names (only when
/// `with_tag_filter`). The tag filter is a semi-join, so a note matching
/// several filter tags still comes back once.
fn build_list_query(with_tag_filter: bool) -> String {
    let mut query = format!(
        "SELECT {} FROM movie_notes n WHERE n.user_id = $1 AND n.title LIKE $2 ESCAPE '\\' ",
        NOTE_COLUMNS
    );
    if with_tag_filter {
        query.push_str(
            "AND EXISTS (SELECT 1 FROM movie_tags t WHERE t.note_id = n.id AND t.name = ANY($3)) ",
        );
    }
    query.push_str("ORDER BY n.title, n.id");
    query
}

async fn title_exists_in<'e>(executor: impl PgExecutor<'e>, title: &str) -> Result<bool> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM movie_notes WHERE title = $1)")
        .bind(title)
        .fetch_one(executor)
        .await
        .map_err(Error::Database)
}

#[async_trait]
impl MovieNoteRepository for PgMovieNoteRepository {
    async fn insert(&self, req: CreateMovieNoteRequest) -> Result<i64> {
        // Reject before a connection is acquired.
        let rating = validate_rating(req.rating)?;

        let mut tx = self.pool.begin().await.map_err(Error::Database)?;
        let note_id = self.insert_validated(&mut tx, req, rating).await?;
        tx.commit().await.map_err(Error::Database)?;
        Ok(note_id)
    }

    async fn fetch(&self, id: i64) -> Result<MovieNoteWithTags> {
        let note = sqlx::query_as::<_, MovieNote>(&format!(
            "SELECT {} FROM movie_notes n WHERE n.id = $1",
            NOTE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .ok_or_else(|| Error::NotFound(format!("Movie note {} not found", id)))?;

        let tags = fetch_for_note(&self.pool, id).await?;
        Ok(MovieNoteWithTags::new(note, tags))
    }

    async fn list(&self, req: ListMovieNotesRequest) -> Result<Vec<MovieNoteWithTags>> {
        let start = Instant::now();
        let pattern = format!("%{}%", escape_like(&req.title));
        let tag_filter = req.tag_filter();

        let query = build_list_query(tag_filter.is_some());
        let mut q = sqlx::query_as::<_, MovieNote>(&query)
            .bind(req.user_id)
            .bind(&pattern);
        if let Some(tags) = tag_filter {
            q = q.bind(tags);
        }
        let notes = q.fetch_all(&self.pool).await.map_err(Error::Database)?;

        // All of the user's tags in one query, grouped per note in memory.
        let tags = fetch_for_user(&self.pool, req.user_id).await?;
        let result = attach_tags(notes, tags);

        let filter_desc = tag_filter.map(|t| t.join(",")).unwrap_or_default();
        debug!(
            subsystem = "database",
            component = "movie_notes",
            op = "list",
            user_id = req.user_id,
            tag_filter = %filter_desc,
            result_count = result.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Listed movie notes"
        );
        Ok(result)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM movie_notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        info!(
            subsystem = "database",
            component = "movie_notes",
            op = "delete",
            note_id = id,
            deleted = result.rows_affected(),
            "Deleted movie note"
        );
        Ok(())
    }

    async fn title_exists(&self, title: &str) -> Result<bool> {
        title_exists_in(&self.pool, title).await
    }
}

// =============================================================================
// TRANSACTION-AWARE VARIANTS
// =============================================================================

impl PgMovieNoteRepository {
    /// Insert a note and its tags within an existing transaction.
    ///
    /// The caller owns the transaction; dropping it without commit discards
    /// both the note and its tags. Validates the rating like `insert` does.
    pub async fn insert_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        req: CreateMovieNoteRequest,
    ) -> Result<i64> {
        let rating = validate_rating(req.rating)?;
        self.insert_validated(tx, req, rating).await
    }

    async fn insert_validated(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        req: CreateMovieNoteRequest,
        rating: i32,
    ) -> Result<i64> {
        if title_exists_in(&mut **tx, &req.title).await? {
            debug!(
                subsystem = "database",
                component = "movie_notes",
                op = "insert",
                title = %req.title,
                "Rejected duplicate title"
            );
            return Err(Error::Conflict(MSG_DUPLICATE_TITLE.to_string()));
        }

        let note_id: i64 = sqlx::query_scalar(
            "INSERT INTO movie_notes (title, description, rating, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(rating)
        .bind(req.user_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_insert_error)?;

        let tags = normalize_tag_names(req.tags);
        if !tags.is_empty() {
            // One statement for the whole batch, rows kept in request order
            sqlx::query(
                "INSERT INTO movie_tags (note_id, user_id, name)
                 SELECT $1, $2, t.name
                 FROM UNNEST($3::text[]) WITH ORDINALITY AS t(name, ord)
                 ORDER BY t.ord",
            )
            .bind(note_id)
            .bind(req.user_id)
            .bind(&tags)
            .execute(&mut **tx)
            .await
            .map_err(Error::Database)?;
        }

        info!(
            subsystem = "database",
            component = "movie_notes",
            op = "insert",
            note_id,
            user_id = req.user_id,
            tag_count = tags.len(),
            "Inserted movie note"
        );
        Ok(note_id)
    }
}
