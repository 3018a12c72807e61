//! Database module for search analytics.
//!
//! Uses SQLx with SQLite for lightweight, embedded storage. Each distinct
//! search term gets one row holding how often it was searched and the movie
//! it first surfaced.
//!
//! # Example
//!
//! ```ignore
//! use movie_scout::db::{init_db, SqliteSearchAnalytics};
//!
//! let pool = init_db("sqlite:movie_scout.db").await?;
//! let analytics = SqliteSearchAnalytics::new(pool);
//! let top = analytics.top_searches(5).await?;
//! ```

use async_trait::async_trait;
use serde::Serialize;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::error::{Result, ResultExt};
use crate::model::Movie;

/// Default database filename.
pub const DEFAULT_DB_NAME: &str = "movie_scout.db";

/// Build a SQLite database URL from an optional path.
///
/// If no path is provided, uses [`DEFAULT_DB_NAME`] in the current directory.
pub fn db_url(path: Option<&std::path::Path>) -> String {
    match path {
        Some(p) => format!("sqlite:{}", p.display()),
        None => format!("sqlite:{}", DEFAULT_DB_NAME),
    }
}

/// Initialize the database connection pool and run migrations.
///
/// Creates the database file if it doesn't exist, establishes a connection
/// pool with up to 5 connections, and runs all pending migrations.
///
/// # Errors
///
/// Returns an error if:
/// - Database creation fails
/// - Connection cannot be established
/// - Migration fails
pub async fn init_db(db_url: &str) -> std::result::Result<SqlitePool, sqlx::Error> {
    if !sqlx::Sqlite::database_exists(db_url).await.unwrap_or(false) {
        sqlx::Sqlite::create_database(db_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Receives one query→movie association per successful, non-empty search.
#[async_trait]
pub trait SearchAnalytics: Send + Sync {
    async fn record_search(&self, query: &str, movie: &Movie) -> Result<()>;
}

/// A recorded search term with its running count.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct SearchCount {
    pub search_term: String,
    /// Catalog id of the first movie this term returned
    pub movie_id: i64,
    pub title: String,
    pub poster_url: Option<String>,
    pub count: i64,
    /// RFC 3339 timestamp of the latest recording
    pub updated_at: String,
}

/// SQLite-backed search analytics.
#[derive(Debug, Clone)]
pub struct SqliteSearchAnalytics {
    pool: SqlitePool,
}

impl SqliteSearchAnalytics {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating and migrating if needed) the database at `db_url`.
    pub async fn connect(db_url: &str) -> Result<Self> {
        let pool = init_db(db_url)
            .await
            .with_context(format!("opening analytics database {db_url}"))?;
        Ok(Self::new(pool))
    }

    /// Most frequent search terms, highest count first, ties by term.
    pub async fn top_searches(&self, limit: u32) -> Result<Vec<SearchCount>> {
        let rows = sqlx::query_as::<_, SearchCount>(
            r#"
            SELECT search_term, movie_id, title, poster_url, count, updated_at
            FROM search_counts
            ORDER BY count DESC, search_term ASC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[async_trait]
impl SearchAnalytics for SqliteSearchAnalytics {
    /// Insert a new term with count 1, or bump an existing term's count.
    ///
    /// The stored movie stays the one from the first recording.
    async fn record_search(&self, query: &str, movie: &Movie) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO search_counts (search_term, movie_id, title, poster_url, count, updated_at)
            VALUES (?, ?, ?, ?, 1, ?)
            ON CONFLICT(search_term) DO UPDATE SET
                count = count + 1,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(query)
        .bind(movie.id)
        .bind(&movie.title)
        .bind(movie.poster_path.as_deref())
        .bind(&now)
        .execute(&self.pool)
        .await?;

        tracing::debug!(search_term = %query, movie_id = movie.id, "Recorded search");
        Ok(())
    }
}
