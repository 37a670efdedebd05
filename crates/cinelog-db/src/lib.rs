//! # cinelog-db
//!
//! PostgreSQL database layer for cinelog.
//!
//! This crate provides:
//! - Connection pool management
//! - Movie note and tag repositories
//! - Embedded schema migrations (feature `migrations`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use cinelog_db::{CreateMovieNoteRequest, Database, MovieNoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/cinelog").await?;
//!
//!     let note_id = db.notes.insert(CreateMovieNoteRequest {
//!         title: "Matrix".to_string(),
//!         description: "Red pill".to_string(),
//!         rating: 5,
//!         tags: vec!["scifi".to_string(), "action".to_string()],
//!         user_id: 1,
//!     }).await?;
//!
//!     println!("Created movie note: {}", note_id);
//!     Ok(())
//! }
//! ```
pub mod notes;
pub mod pool;
pub mod tags;

// Test fixtures for integration tests
// Note: Always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use cinelog_core::*;

/// Escape LIKE wildcard characters (`%`, `_`, `\`) in user input.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

// Re-export repository implementations
pub use notes::PgMovieNoteRepository;
pub use pool::{
    create_lazy_pool, create_pool, create_pool_with_config, log_pool_metrics, PoolConfig,
};
pub use tags::PgMovieTagRepository;

/// Combined database context with all repositories.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Movie note repository (create, show, list, delete).
    pub notes: PgMovieNoteRepository,
    /// Movie tag repository (read-only views).
    pub tags: PgMovieTagRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            notes: PgMovieNoteRepository::new(pool.clone()),
            tags: PgMovieTagRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Create a database context whose connections open on first query.
    pub fn connect_lazy(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_lazy_pool(url, config)?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}
