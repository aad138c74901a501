//! The in-memory note registry.
//!
//! [`Notebook`] owns every [`Note`] for the lifetime of a run and is the
//! only path to create, enumerate, filter, tag, delete and aggregate them.
//! Nothing here prints; user-facing messaging belongs to the CLI layer.

use std::collections::BTreeMap;

use log::debug;

use crate::{Note, NotebookError, Result};

/// In-memory registry of notes, indexed by their numeric code.
///
/// Codes start at 1 and are assigned by a counter that only ever grows, so
/// a code is never reused within one Notebook instance, deletions included.
#[derive(Debug, Default)]
pub struct Notebook {
    /// Notes keyed by code. Codes increase monotonically, so iteration
    /// order is also insertion order.
    notes: BTreeMap<u64, Note>,

    /// The last code handed out; 0 before the first insertion.
    last_code: u64,
}

impl Notebook {
    /// Creates an empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a note and returns its assigned code.
    ///
    /// `importance` is stored as supplied; it is classified
    /// case-insensitively only when filtering. This operation cannot fail.
    pub fn add_note(
        &mut self,
        title: impl Into<String>,
        text: impl Into<String>,
        importance: impl Into<String>,
    ) -> u64 {
        self.last_code += 1;
        let code = self.last_code;
        let note = Note::new(code, title.into(), text.into(), importance.into());
        debug!("Created note {} ('{}')", code, note.title);
        self.notes.insert(code, note);
        code
    }

    /// Looks up a note by code.
    pub fn note(&self, code: u64) -> Option<&Note> {
        self.notes.get(&code)
    }

    /// Returns all notes in enumeration order.
    pub fn list_notes(&self) -> Vec<&Note> {
        self.notes.values().collect()
    }

    /// Returns the notes whose importance classifies as HIGH or MEDIUM
    /// (case-insensitive); LOW and unrecognized values are excluded.
    pub fn important_notes(&self) -> Vec<&Note> {
        self.notes.values().filter(|n| n.is_important()).collect()
    }

    /// Adds `tag` to the note with the given code. Adding a tag the note
    /// already carries is a no-op.
    pub fn add_tag(&mut self, code: u64, tag: impl Into<String>) -> Result<()> {
        let note = self
            .notes
            .get_mut(&code)
            .ok_or(NotebookError::NoteNotFound { code })?;
        note.add_tag(tag);
        Ok(())
    }

    /// Removes and returns the note with the given code.
    ///
    /// The code counter is unaffected, so the freed code is never handed
    /// out again.
    pub fn delete_note(&mut self, code: u64) -> Result<Note> {
        match self.notes.remove(&code) {
            Some(note) => {
                debug!("Deleted note {}", code);
                Ok(note)
            }
            None => Err(NotebookError::NoteNotFound { code }),
        }
    }

    /// Counts, per tag, how many notes carry it. Tags in use by no note do
    /// not appear in the result.
    pub fn tag_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for note in self.notes.values() {
            for tag in &note.tags {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Number of notes currently held.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the notebook holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(notebook: &mut Notebook, title: &str, importance: &str) -> u64 {
        notebook.add_note(title, "body", importance)
    }

    #[test]
    fn codes_start_at_one_and_increase_without_gaps() {
        let mut notebook = Notebook::new();
        assert_eq!(sample(&mut notebook, "a", "HIGH"), 1);
        assert_eq!(sample(&mut notebook, "b", "LOW"), 2);
        assert_eq!(sample(&mut notebook, "c", "MEDIUM"), 3);
    }

    #[test]
    fn deleted_codes_are_never_reused() {
        let mut notebook = Notebook::new();
        sample(&mut notebook, "a", "HIGH");
        sample(&mut notebook, "b", "HIGH");
        notebook.delete_note(2).unwrap();
        assert_eq!(sample(&mut notebook, "c", "HIGH"), 3);
        notebook.delete_note(1).unwrap();
        notebook.delete_note(3).unwrap();
        assert!(notebook.is_empty());
        assert_eq!(sample(&mut notebook, "d", "HIGH"), 4);
    }

    #[test]
    fn delete_twice_reports_not_found() {
        let mut notebook = Notebook::new();
        let code = sample(&mut notebook, "a", "HIGH");
        assert!(notebook.delete_note(code).is_ok());
        match notebook.delete_note(code) {
            Err(NotebookError::NoteNotFound { code: missing }) => assert_eq!(missing, code),
            other => panic!("expected NoteNotFound, got {:?}", other.map(|n| n.code)),
        }
    }

    #[test]
    fn add_tag_on_unknown_code_reports_not_found() {
        let mut notebook = Notebook::new();
        assert!(matches!(
            notebook.add_tag(42, "work"),
            Err(NotebookError::NoteNotFound { code: 42 })
        ));
    }

    #[test]
    fn add_tag_twice_leaves_one_occurrence() {
        let mut notebook = Notebook::new();
        let code = sample(&mut notebook, "a", "HIGH");
        notebook.add_tag(code, "work").unwrap();
        notebook.add_tag(code, "work").unwrap();
        assert_eq!(notebook.note(code).unwrap().tags, vec!["work"]);
    }

    #[test]
    fn important_notes_filters_case_insensitively() {
        let mut notebook = Notebook::new();
        let high = sample(&mut notebook, "a", "high");
        let medium = sample(&mut notebook, "b", "Medium");
        sample(&mut notebook, "c", "LOW");
        sample(&mut notebook, "d", "someday");

        let important: Vec<u64> = notebook.important_notes().iter().map(|n| n.code).collect();
        assert_eq!(important, vec![high, medium]);
    }

    #[test]
    fn list_notes_enumerates_in_insertion_order() {
        let mut notebook = Notebook::new();
        sample(&mut notebook, "a", "HIGH");
        sample(&mut notebook, "b", "LOW");
        sample(&mut notebook, "c", "MEDIUM");
        notebook.delete_note(2).unwrap();
        sample(&mut notebook, "d", "LOW");

        let titles: Vec<&str> = notebook
            .list_notes()
            .iter()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "c", "d"]);
    }

    #[test]
    fn tag_counts_sums_distinct_notes_per_tag() {
        let mut notebook = Notebook::new();
        let first = sample(&mut notebook, "a", "HIGH");
        let second = sample(&mut notebook, "b", "LOW");
        notebook.add_tag(first, "work").unwrap();
        notebook.add_tag(first, "home").unwrap();
        notebook.add_tag(second, "work").unwrap();

        let counts = notebook.tag_counts();
        assert_eq!(counts.get("work"), Some(&2));
        assert_eq!(counts.get("home"), Some(&1));
        assert_eq!(counts.get("never-used"), None);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn tag_counts_drops_entries_when_notes_are_deleted() {
        let mut notebook = Notebook::new();
        let code = sample(&mut notebook, "a", "HIGH");
        notebook.add_tag(code, "work").unwrap();
        notebook.delete_note(code).unwrap();
        assert!(notebook.tag_counts().is_empty());
    }
}
