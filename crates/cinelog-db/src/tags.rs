//! Movie tag repository implementation.

use async_trait::async_trait;
use sqlx::{PgExecutor, Pool, Postgres};
use tracing::debug;

use cinelog_core::{Error, MovieTag, MovieTagRepository, Result, TagSummary};

/// PostgreSQL implementation of MovieTagRepository.
#[derive(Clone)]
pub struct PgMovieTagRepository {
    pool: Pool<Postgres>,
}

impl PgMovieTagRepository {
    /// Create a new PgMovieTagRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Load the tags of one note, ordered by name.
pub(crate) async fn fetch_for_note<'e>(
    executor: impl PgExecutor<'e>,
    note_id: i64,
) -> Result<Vec<MovieTag>> {
    sqlx::query_as::<_, MovieTag>(
        "SELECT id, note_id, user_id, name FROM movie_tags WHERE note_id = $1 ORDER BY name, id",
    )
    .bind(note_id)
    .fetch_all(executor)
    .await
    .map_err(Error::Database)
}

/// Load every tag owned by a user, ordered by name.
pub(crate) async fn fetch_for_user<'e>(
    executor: impl PgExecutor<'e>,
    user_id: i64,
) -> Result<Vec<MovieTag>> {
    sqlx::query_as::<_, MovieTag>(
        "SELECT id, note_id, user_id, name FROM movie_tags WHERE user_id = $1 ORDER BY name, id",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(Error::Database)
}

#[async_trait]
impl MovieTagRepository for PgMovieTagRepository {
    async fn get_for_note(&self, note_id: i64) -> Result<Vec<MovieTag>> {
        fetch_for_note(&self.pool, note_id).await
    }

    async fn get_for_user(&self, user_id: i64) -> Result<Vec<MovieTag>> {
        fetch_for_user(&self.pool, user_id).await
    }

    async fn summarize_for_user(&self, user_id: i64) -> Result<Vec<TagSummary>> {
        let summaries = sqlx::query_as::<_, TagSummary>(
            r#"
            SELECT
                name,
                COUNT(DISTINCT note_id) AS note_count
            FROM movie_tags
            WHERE user_id = $1
            GROUP BY name
            ORDER BY name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "movie_tags",
            op = "summarize",
            user_id,
            result_count = summaries.len(),
            "Summarized user tags"
        );
        Ok(summaries)
    }
}
