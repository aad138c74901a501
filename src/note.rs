//! Core data structures for the notebook application.
//!
//! This module contains the Note value type and the Importance
//! classification used when filtering notes.
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single note in our system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, assigned by the owning Notebook
    pub code: u64,
    /// Note title
    pub title: String,
    /// Free-form note body
    pub text: String,
    /// Importance level as supplied by the caller (HIGH, MEDIUM or LOW
    /// by convention; not validated here)
    pub importance: String,
    /// When the note was created
    pub created_at: DateTime<Utc>,
    /// Tags for organization, insertion order preserved
    pub tags: Vec<String>,
}

impl Note {
    /// Creates a new note with the given code, title, text and importance.
    ///
    /// Notes are only ever constructed by a [`crate::Notebook`], which owns
    /// code assignment.
    pub(crate) fn new(code: u64, title: String, text: String, importance: String) -> Self {
        Note {
            code,
            title,
            text,
            importance,
            created_at: Utc::now(),
            tags: Vec::new(),
        }
    }

    /// Appends `tag` if the note does not already carry it; duplicate
    /// additions are no-ops. Equality is case-sensitive.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Whether this note classifies as important (HIGH or MEDIUM,
    /// case-insensitive).
    pub fn is_important(&self) -> bool {
        Importance::parse(&self.importance).is_some_and(Importance::is_important)
    }
}

impl fmt::Display for Note {
    // Canonical rendering: code, creation date, title and text.
    // Tags are deliberately not part of it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Code: {}", self.code)?;
        writeln!(
            f,
            "Creation date: {}",
            self.created_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        write!(f, "{}: {}", self.title, self.text)
    }
}

/// The recognized importance levels.
///
/// Notes store importance as a raw string; this enum only exists to
/// classify that string when filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    /// Case-insensitive parse; anything outside HIGH/MEDIUM/LOW is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "HIGH" => Some(Importance::High),
            "MEDIUM" => Some(Importance::Medium),
            "LOW" => Some(Importance::Low),
            _ => None,
        }
    }

    /// High and Medium count as important, Low does not.
    pub fn is_important(self) -> bool {
        !matches!(self, Importance::Low)
    }
}
