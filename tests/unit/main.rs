//! Unit test suite entry point.

mod catalog_tests;
mod config_tests;
mod scoring_tests;
