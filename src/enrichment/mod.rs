//! Movie enrichment and normalization - merges catalog stubs with OMDb data.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - enrichment record and lookup outcome
//! - **API DTOs** (`omdb/dto.rs`, `crate::catalog::dto`) - exact API response shapes
//! - **Adapters** - convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs
//! - **Merge** (`merge.rs`) - pure field-by-field merge into canonical records
//! - **Service** - fetch, enrich concurrently, merge, keep catalog order
//!
//! The secondary lookup is best-effort: whatever goes wrong there becomes
//! "no enrichment" for that one movie and never fails the list.
//!
//! # Usage
//!
//! ```ignore
//! use movie_scout::enrichment::MovieService;
//!
//! let service = MovieService::from_config(&config)?;
//! let movies = service.fetch_movies("batman", None).await?;
//! println!("{} -> {:?}", movies[0].title, movies[0].poster_path);
//! ```

pub mod domain;
pub mod merge;
pub mod omdb;
pub mod service;
pub mod traits;

pub use domain::{EnrichmentError, EnrichmentRecord, LookupOutcome, PlotLength};
pub use service::MovieService;
pub use traits::{CatalogApi, EnrichmentApi};
