//! Error types for the notebook application.
//!
//! This module defines the error type shared by the core registry and the
//! CLI layer.

use std::io;

use thiserror::Error;

/// The main error type for notebook operations.
#[derive(Error, Debug)]
pub enum NotebookError {
    /// Errors from console/stdin plumbing in the interactive shell.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors from rendering notes as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Note was not found when performing an operation.
    #[error("Note not found: {code}")]
    NoteNotFound { code: u64 },
}
