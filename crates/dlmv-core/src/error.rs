//! Error types for navigation and cloning.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while navigating the filesystem.
///
/// All of these are recoverable at the controller boundary: the previous
/// valid state is kept and the error is shown as a transient message.
#[derive(Debug, Error)]
pub enum NavError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found (e.g., the directory vanished under us).
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Custom path input does not name an existing directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error while reading a directory.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NavError {
    /// Create an I/O error with path context, classifying common kinds.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Errors from the external clone collaborator.
#[derive(Debug, Error)]
pub enum CloneError {
    /// The clone command could not be spawned at all.
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The clone command ran but exited unsuccessfully.
    #[error("git clone failed{}: {message}", exit_label(.code))]
    Failed { code: Option<i32>, message: String },

    /// The source reference yields no usable repository name.
    #[error("Cannot derive a repository name from: {reference}")]
    BadSource { reference: String },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit {code})"),
        None => String::new(),
    }
}
