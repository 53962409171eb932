//! This module stores the type for the collective state of the application.
use crate::notes::{request::UpdateNoteRequest, Note};

/// The shared state for the application.
#[derive(Debug)]
pub struct AppState {
    /// Every note currently held in memory, in creation order.
    notes: Vec<Note>,
}

impl AppState {
    /// Creates an empty [`AppState`].
    pub fn new() -> Self {
        AppState { notes: Vec::new() }
    }

    /// Creates an [`AppState`] holding the fixed notes the server starts
    /// with. A restart always comes back to exactly this collection.
    pub fn seed() -> Self {
        AppState {
            notes: vec![
                Note {
                    id: "1".to_string(),
                    content: "HTML is easy".to_string(),
                    important: true,
                },
                Note {
                    id: "2".to_string(),
                    content: "Browser can execute only JavaScript".to_string(),
                    important: false,
                },
                Note {
                    id: "3".to_string(),
                    content: "GET and POST are the most important methods of HTTP protocol"
                        .to_string(),
                    important: true,
                },
            ],
        }
    }

    /// Returns all notes in creation order.
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    /// Finds the first note whose id matches.
    pub fn find(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Appends a new note, assigning it the next free id.
    pub fn create(&mut self, content: String, important: bool) -> Note {
        let note = Note {
            id: self.next_id(),
            content,
            important,
        };

        self.notes.push(note.clone());

        note
    }

    /// Merges the patch into the note with the given id and returns the
    /// merged note. Fields missing from the patch are left untouched.
    pub fn update(&mut self, id: &str, patch: &UpdateNoteRequest) -> Option<Note> {
        let note = self.notes.iter_mut().find(|note| note.id == id)?;

        if let Some(content) = &patch.content {
            note.content = content.clone();
        }
        if let Some(important) = patch.important {
            note.important = important;
        }

        Some(note.clone())
    }

    /// Removes the note with the given id. Removing an id that is not
    /// present is a no-op, so callers may retry freely.
    pub fn remove(&mut self, id: &str) {
        self.notes.retain(|note| note.id != id);
    }

    /// Computes the next id from the notes currently held: one past the
    /// largest numeric id, or "1" for an empty collection. Recomputed on
    /// every create, so deleting the newest note frees its id for reuse.
    fn next_id(&self) -> String {
        let max_id = self
            .notes
            .iter()
            .filter_map(|note| note.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        (max_id + 1).to_string()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeded_state_assigns_the_next_numeric_id() {
        let mut state = AppState::seed();

        let note = state.create("a new note".to_string(), false);

        assert_eq!(note.id, "4");
    }

    #[test]
    fn empty_state_starts_counting_at_one() {
        let mut state = AppState::new();

        let note = state.create("first".to_string(), true);

        assert_eq!(note.id, "1");
    }

    #[test]
    fn deleting_the_newest_note_frees_its_id() {
        let mut state = AppState::seed();

        let note = state.create("short lived".to_string(), false);
        assert_eq!(note.id, "4");

        state.remove("4");
        let note = state.create("replacement".to_string(), false);

        assert_eq!(note.id, "4");
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut state = AppState::seed();
        let patch = UpdateNoteRequest {
            content: None,
            important: Some(true),
        };

        let note = state.update("2", &patch).unwrap();

        assert_eq!(note.content, "Browser can execute only JavaScript");
        assert!(note.important);
    }

    #[test]
    fn update_of_a_missing_note_returns_none() {
        let mut state = AppState::seed();

        assert!(state.update("999", &UpdateNoteRequest::default()).is_none());
    }

    #[test]
    fn remove_keeps_the_order_of_the_remaining_notes() {
        let mut state = AppState::seed();

        state.remove("2");

        let ids: Vec<&str> = state.all().iter().map(|note| note.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn remove_of_a_missing_note_is_a_no_op() {
        let mut state = AppState::seed();

        state.remove("999");
        state.remove("999");

        assert_eq!(state.all().len(), 3);
    }

    #[test]
    fn ids_stay_unique_across_mutations() {
        let mut state = AppState::seed();

        state.create("one".to_string(), false);
        state.remove("2");
        state.create("two".to_string(), true);
        state.update(
            "1",
            &UpdateNoteRequest {
                content: Some("changed".to_string()),
                important: None,
            },
        );

        let ids: HashSet<&str> = state.all().iter().map(|note| note.id.as_str()).collect();
        assert_eq!(ids.len(), state.all().len());
    }
}
