//! Error types for a batch run.
//!
//! `SkipReason` covers everything that drops a single URL; its `Display` is the
//! diagnostic line printed to stderr. `FatalError` covers the startup checks that
//! abort the run before any URL is touched.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fetch::FetchError;

/// Why a single URL was not saved. Never aborts the run.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("Skipping URL {url}: malformed URL")]
    Malformed { url: String },

    #[error("Skipping URL {url}: invalid protocol (only HTTP and HTTPS allowed)")]
    InvalidProtocol { url: String },

    #[error("Skipping URL {url}: invalid filename")]
    InvalidFilename { url: String },

    /// HTTP status error or transport failure; the two render differently.
    #[error("Skipping URL {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Skipping URL {url}: file already exists")]
    AlreadyExists { url: String },

    #[error("Error: cannot write file '{}', reason: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Startup failure; the run stops before any download.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("Error: path '{}' does not exist", .0.display())]
    MissingTargetDir(PathBuf),

    #[error("Error: path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Error: file '{}' does not exist", .0.display())]
    MissingInputFile(PathBuf),

    #[error("Error: cannot read from file '{}', reason: {source}", .path.display())]
    UnreadableInputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
