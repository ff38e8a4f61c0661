//! Error types for the system test runner
//!
//! Every variant here is fatal and aborts the whole run. Per-test mismatches
//! are not errors; they are reported as verdicts and the run continues.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the system test runner
#[derive(Error, Debug)]
pub enum Error {
    // === Manifest Errors ===
    #[error("Failed to read manifest '{path}': {error}")]
    ManifestRead { path: String, error: String },

    #[error("Malformed manifest line {line} in '{path}': expected '<test file>,<expected output>', got {content:?}")]
    ManifestMalformed {
        path: String,
        line: usize,
        content: String,
    },

    // === Execution Errors ===
    #[error("Failed to launch '{program}': {error}. Check the executable path with --executable")]
    SpawnFailed { program: String, error: String },

    #[error("Launcher '{0}' not found in PATH")]
    LauncherNotFound(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file '{path}': {error}")]
    ConfigParse { path: String, error: String },

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a malformed manifest line error
    pub fn manifest_malformed(path: &str, line: usize, content: &str) -> Self {
        Self::ManifestMalformed {
            path: path.to_string(),
            line,
            content: content.to_string(),
        }
    }

    /// Create a spawn failure error for the given program
    pub fn spawn_failed(program: &str, error: &io::Error) -> Self {
        Self::SpawnFailed {
            program: program.to_string(),
            error: error.to_string(),
        }
    }
}
