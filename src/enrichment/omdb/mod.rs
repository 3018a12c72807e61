//! OMDb API integration
//!
//! Supplies posters, cast, director, box-office figures and plots for movies
//! the catalog identifies by IMDb id.
//!
//! API docs: https://www.omdbapi.com

pub mod dto;
mod adapter;
mod client;

pub use client::OmdbClient;
