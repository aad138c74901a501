//! Shared types for the notebook application.
//!
//! This module contains the crate-wide Result alias and the command set
//! understood by the interactive shell.
use clap::Subcommand;

use crate::NotebookError;

/// A specialized Result type for notebook operations.
pub type Result<T> = std::result::Result<T, NotebookError>;

/// Available commands inside a notebook session
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new note
    Add {
        /// Title of the note
        title: String,

        /// Body text of the note
        text: String,

        /// Importance level (HIGH, MEDIUM or LOW)
        #[clap(short, long)]
        importance: Option<String>,
    },

    /// List all notes
    List {
        /// Format output as JSON
        #[clap(short, long)]
        json: bool,

        /// Show full note bodies and tags instead of previews
        #[clap(short, long)]
        detailed: bool,
    },

    /// List only important notes (HIGH or MEDIUM)
    Important {
        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Add a tag to a note
    Tag {
        /// Code of the note to tag
        code: u64,

        /// Tag to add (adding an existing tag is a no-op)
        tag: String,
    },

    /// Delete a note by code
    Delete {
        /// Code of the note to delete
        code: u64,

        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },

    /// Show how many notes carry each tag
    Tags,

    /// Leave the session
    #[clap(alias = "exit")]
    Quit,
}
