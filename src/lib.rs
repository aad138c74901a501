//! In-memory note-taking library
//!
//! This library provides a notebook registry for creating, listing,
//! filtering, tagging and deleting short notes, plus the interactive CLI
//! shell layered on top of it.

mod cli;
mod config;
mod errors;
mod note;
mod notebook;
mod types;

// Re-export key components
pub use cli::*;
pub use config::*;
pub use errors::*;
pub use note::*;
pub use notebook::*;
pub use types::*;
