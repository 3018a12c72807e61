//! Test utilities and fixtures for movie-scout tests.
//!
//! This module provides common test helpers, fixture factories, and
//! database utilities to reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use movie_scout::test_utils::{temp_db, mock_stub};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let (pool, _dir) = temp_db().await;
//!     let stub = mock_stub(1, Some("tt0000001"));
//!     // ... test logic
//! }
//! ```

use sqlx::sqlite::SqlitePool;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::catalog::dto::{CatalogIds, CatalogMovie, MovieDetailsResponse};
use crate::enrichment::EnrichmentRecord;
use crate::model::Movie;

/// Creates a temporary database for testing.
///
/// The database lives in a temporary directory that is cleaned up when the
/// returned `TempDir` is dropped. Migrations are run automatically.
/// Keep the TempDir alive for the duration of your test.
pub async fn temp_db() -> (SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db");
    let db_url = format!("sqlite:{}", db_path.display());

    let pool = crate::db::init_db(&db_url)
        .await
        .expect("Failed to initialize test database");

    (pool, dir)
}

/// Serves exactly one canned HTTP response on a random local port.
///
/// Returns the base URL to point a client at, and a receiver that yields the
/// raw request head (request line plus headers) once the client has called.
///
/// ```ignore
/// let (base, request) = serve_once("503 Service Unavailable", "").await;
/// // ... call the client against `base`
/// assert!(request.await.unwrap().starts_with("GET /movies/trending"));
/// ```
pub async fn serve_once(status: &str, body: &str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    let response = format!(
        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => head.extend_from_slice(&buf[..n]),
            }
        }
        let _ = tx.send(String::from_utf8_lossy(&head).into_owned());
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    (format!("http://{}", addr), rx)
}

/// Creates a catalog list stub with the given ids.
///
/// Customize with struct update syntax:
///
/// ```ignore
/// let stub = CatalogMovie {
///     overview: None,
///     ..mock_stub(1, None)
/// };
/// ```
pub fn mock_stub(trakt_id: i64, imdb_id: Option<&str>) -> CatalogMovie {
    CatalogMovie {
        title: Some(format!("Movie {}", trakt_id)),
        year: Some(2020),
        ids: Some(CatalogIds {
            trakt: Some(trakt_id),
            slug: Some(format!("movie-{}-2020", trakt_id)),
            imdb: imdb_id.map(String::from),
            ..Default::default()
        }),
        overview: Some("A test movie.".to_string()),
        ..Default::default()
    }
}

/// Creates a found enrichment record with a poster.
pub fn mock_record() -> EnrichmentRecord {
    EnrichmentRecord {
        poster: Some("https://img.example/poster.jpg".to_string()),
        found: true,
        ..Default::default()
    }
}

/// Creates a fully populated catalog details response.
pub fn mock_details_response(trakt_id: i64, imdb_id: Option<&str>) -> MovieDetailsResponse {
    MovieDetailsResponse {
        title: Some("Batman Begins".to_string()),
        year: Some(2005),
        ids: Some(CatalogIds {
            trakt: Some(trakt_id),
            slug: Some("batman-begins-2005".to_string()),
            imdb: imdb_id.map(String::from),
            tmdb: Some(272),
            ..Default::default()
        }),
        tagline: Some("Evil fears the knight.".to_string()),
        overview: Some("Driven by tragedy, Bruce Wayne dedicates his life.".to_string()),
        released: Some("2005-06-15".to_string()),
        runtime: Some(140),
        language: Some("en".to_string()),
        genres: Some(vec!["action".to_string(), "crime".to_string()]),
        rating: Some(7.7),
        votes: Some(48_000),
        ..Default::default()
    }
}

/// Creates a normalized movie, as handed to analytics.
pub fn mock_movie(id: i64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        release_date: "2020-01-01".to_string(),
        overview: "A test movie.".to_string(),
        poster_path: Some(format!("https://img.example/{}.jpg", id)),
        vote_average: 14.0,
        vote_count: 100,
        genres: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_temp_db_creates_working_database() {
        let (pool, _dir) = temp_db().await;

        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM search_counts")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.0, 0);
    }

    #[tokio::test]
    async fn test_serve_once_answers_one_request() {
        let (base, request) = serve_once("200 OK", "[]").await;

        let body = reqwest::get(format!("{}/ping", base))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(body, "[]");
        assert!(request.await.unwrap().starts_with("GET /ping HTTP/1.1"));
    }

    #[test]
    fn test_mock_stub_ids() {
        let stub = mock_stub(42, Some("tt42"));
        assert_eq!(stub.catalog_id(), Some(42));
        assert_eq!(stub.imdb_id(), Some("tt42"));
        assert_eq!(mock_stub(1, None).imdb_id(), None);
    }

    #[test]
    fn test_mock_details_response_defaults() {
        let details = mock_details_response(1, Some("tt0372784"));
        assert_eq!(details.catalog_id(), Some(1));
        assert_eq!(details.imdb_id(), Some("tt0372784"));
        assert_eq!(details.rating, Some(7.7));
    }
}
