//! Catalog API integration (Trakt).
//!
//! Builds the search / trending / genre requests, executes them and flattens
//! the endpoint-specific envelopes into an ordered list of movie stubs.
//!
//! Layering mirrors the enrichment providers:
//! - `dto.rs` - exact response shapes
//! - `adapter.rs` - per-endpoint envelope decoding
//! - `client.rs` - HTTP client with the fixed catalog headers
//! - `domain.rs` - request selection and errors
//!
//! API docs: https://trakt.docs.apiary.io

pub mod dto;
mod adapter;
mod client;
mod domain;

pub use adapter::{CatalogEnvelope, decode_envelope};
pub use client::CatalogClient;
pub use domain::{CatalogEndpoint, CatalogError, CatalogRequest};
