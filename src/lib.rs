//! arec - assessment recommendation engine
//!
//! Heuristic ranking of a fixed assessment catalog against free-text hiring
//! queries, an optional waterfall through external recommendation services,
//! and an offline evaluation harness (Recall@K, MAP@K, Precision@K).

pub mod api;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod providers;
pub mod queries;
pub mod query_input;
pub mod ranking;
pub mod scoring;
pub mod test_utils;

pub use error::{ArecError, Result};
