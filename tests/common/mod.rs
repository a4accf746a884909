//! Common test utilities shared across integration suites.
//!
//! Helpers here build isolated environments for the binary and provider
//! settings that point at local mock servers.

#![allow(dead_code)]

pub mod providers;

use std::path::Path;

use assert_cmd::Command;

/// Environment variables that would leak host configuration into a run.
const HOST_ENV: &[&str] = &[
    "RUST_LOG",
    "GEMINI_API_KEY",
    "AREC_GEMINI_ENABLED",
    "AREC_GEMINI_API_KEY",
    "AREC_GEMINI_ENDPOINT",
    "AREC_GEMINI_MODEL",
    "AREC_RAG_ENABLED",
    "AREC_RAG_API_KEY",
    "AREC_RAG_ENDPOINT",
    "AREC_PROVIDER_TIMEOUT_SECS",
    "AREC_RANKING_MAX_RESULTS",
    "AREC_EVAL_K",
    "AREC_EVAL_MAX_RESULTS",
    "AREC_FETCH_ENABLED",
    "AREC_CATALOG_PATH",
    "AREC_QUERIES_PATH",
];

/// `arec` running in `dir` with an explicit (possibly missing) config file,
/// so no global or project config is picked up.
pub fn arec_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("arec").expect("arec binary");
    cmd.current_dir(dir).env("AREC_CONFIG", dir.join("arec-test-config.toml"));
    for key in HOST_ENV {
        cmd.env_remove(key);
    }
    cmd
}
