//! Searchable quiz-item catalogue with a paginated title-search HTTP API
//!
//! The catalogue stores three kinds of quiz items (anagram, multiple
//! choice, read-along) behind a single tagged model, persists them in an
//! embedded Sled database (or in memory), and serves case-insensitive
//! title search with deterministic pagination.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod state;

pub use error::{AppError, Result};
