//! Debounced auto-save engine for the note editor.
//!
//! The notes view owns one [`EditorBuffer`] at a time: an explicit view-model
//! for the selected note (or a brand-new draft) and its synchronization
//! state. Keystrokes mark the buffer dirty and re-arm a one-second debounce
//! window by bumping a generation counter; a timer that fires with a stale
//! generation does nothing, so only the last edit in a quiet window reaches
//! the server.
//!
//! In-flight saves are never cancelled. A slow save can be overtaken by a
//! later one, and a completion that lost the race leaves newer edits dirty
//! for the next window to persist — last write wins. Switching notes
//! abandons dirty state outright, exactly like the deployed app.

use api::models::note::normalize_title;
use api::models::{NoteInfo, NotePayload};

/// Quiet period before an edit is persisted.
pub const DEBOUNCE_MS: u32 = 1_000;

/// Synchronization state of the editor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Buffer matches the server.
    Clean,
    /// Local edits pending; the debounce timer for the current generation is
    /// armed.
    Dirty,
    /// A save request is in flight.
    Saving,
    /// The last save failed. No automatic retry; the next keystroke re-arms.
    SaveError,
}

/// A save the view must issue: create when `note_id` is `None`, update
/// otherwise. Carries the generation it was started for so the completion
/// can be matched against later keystrokes.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSave {
    pub note_id: Option<String>,
    pub payload: NotePayload,
    pub generation: u64,
}

/// View-model for the editor pane.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorBuffer {
    note_id: Option<String>,
    title: String,
    body: String,
    state: SyncState,
    generation: u64,
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self {
            note_id: None,
            title: String::new(),
            body: String::new(),
            state: SyncState::Clean,
            generation: 0,
        }
    }
}

impl EditorBuffer {
    /// A blank draft: no server id yet, nothing to save.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an existing note, abandoning whatever the previous buffer held —
    /// there is deliberately no save-before-switch.
    pub fn open(note: &NoteInfo) -> Self {
        Self {
            note_id: Some(note.id.clone()),
            title: note.title.clone(),
            body: note.body.clone(),
            state: SyncState::Clean,
            generation: 0,
        }
    }

    pub fn note_id(&self) -> Option<&str> {
        self.note_id.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == SyncState::Dirty
    }

    /// Record a title keystroke. Returns the generation to arm a fresh
    /// debounce timer with; any previously armed timer is implicitly
    /// cancelled because its generation is now stale.
    pub fn edit_title(&mut self, title: String) -> u64 {
        self.title = title;
        self.edited()
    }

    /// Record a body keystroke. Same debounce contract as [`edit_title`].
    ///
    /// [`edit_title`]: EditorBuffer::edit_title
    pub fn edit_body(&mut self, body: String) -> u64 {
        self.body = body;
        self.edited()
    }

    fn edited(&mut self) -> u64 {
        self.generation += 1;
        self.state = SyncState::Dirty;
        self.generation
    }

    /// The debounce timer armed with `generation` fired. Returns the save to
    /// issue, or `None` when a later keystroke superseded the timer or the
    /// buffer has nothing worth persisting.
    pub fn timer_fired(&mut self, generation: u64) -> Option<PendingSave> {
        if generation != self.generation || self.state != SyncState::Dirty {
            return None;
        }
        self.begin_save()
    }

    /// Explicit "Done": cancel any pending window and save immediately.
    pub fn submit(&mut self) -> Option<PendingSave> {
        self.generation += 1;
        self.begin_save()
    }

    fn begin_save(&mut self) -> Option<PendingSave> {
        // An untouched draft has nothing to persist.
        if self.note_id.is_none() && self.title.trim().is_empty() && self.body.trim().is_empty() {
            return None;
        }
        self.state = SyncState::Saving;
        Some(PendingSave {
            note_id: self.note_id.clone(),
            payload: NotePayload {
                title: normalize_title(&self.title),
                body: self.body.clone(),
            },
            generation: self.generation,
        })
    }

    /// A save finished successfully. A created note's id is adopted either
    /// way; the buffer only returns to Clean when no newer keystrokes
    /// arrived while the request was in flight.
    pub fn save_succeeded(&mut self, saved: &NoteInfo, generation: u64) {
        if self.note_id.is_none() {
            self.note_id = Some(saved.id.clone());
        }
        if generation == self.generation {
            self.state = SyncState::Clean;
        }
    }

    /// A save failed. Stale completions are ignored: a newer window is
    /// already responsible for the buffer's fate.
    pub fn save_failed(&mut self, generation: u64) {
        if generation == self.generation {
            self.state = SyncState::SaveError;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn server_note(id: &str, title: &str, body: &str) -> NoteInfo {
        NoteInfo {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn five_keystrokes_trigger_exactly_one_save() {
        let mut buffer = EditorBuffer::new();
        let generations: Vec<u64> = ["m", "mi", "mil", "milk", "milk!"]
            .iter()
            .map(|text| buffer.edit_body(text.to_string()))
            .collect();

        // The four superseded timers do nothing.
        let mut saves = 0;
        for generation in &generations {
            if let Some(pending) = buffer.timer_fired(*generation) {
                saves += 1;
                assert_eq!(pending.payload.body, "milk!");
            }
        }
        assert_eq!(saves, 1);
        assert_eq!(buffer.state(), SyncState::Saving);
    }

    #[test]
    fn create_adopts_the_returned_id() {
        let mut buffer = EditorBuffer::new();
        let generation = buffer.edit_body("first draft".to_string());

        let pending = buffer.timer_fired(generation).unwrap();
        assert_eq!(pending.note_id, None);

        buffer.save_succeeded(&server_note("note-1", "Untitled Note", "first draft"), generation);
        assert_eq!(buffer.state(), SyncState::Clean);
        assert_eq!(buffer.note_id(), Some("note-1"));

        // Every later save of this buffer is an update.
        let generation = buffer.edit_body("second draft".to_string());
        let pending = buffer.timer_fired(generation).unwrap();
        assert_eq!(pending.note_id.as_deref(), Some("note-1"));
    }

    #[test]
    fn empty_draft_never_saves() {
        let mut buffer = EditorBuffer::new();
        let generation = buffer.edit_title("   ".to_string());
        assert_eq!(buffer.timer_fired(generation), None);
        assert_eq!(buffer.submit(), None);
    }

    #[test]
    fn empty_title_is_sent_as_untitled() {
        let mut buffer = EditorBuffer::new();
        let generation = buffer.edit_body("body only".to_string());
        let pending = buffer.timer_fired(generation).unwrap();
        assert_eq!(pending.payload.title, "Untitled Note");
        assert_eq!(pending.payload.body, "body only");
    }

    #[test]
    fn update_payload_always_carries_both_fields() {
        let mut buffer = EditorBuffer::open(&server_note("n1", "Title", "old body"));
        let generation = buffer.edit_title("New title".to_string());
        let pending = buffer.timer_fired(generation).unwrap();
        assert_eq!(pending.payload.title, "New title");
        assert_eq!(pending.payload.body, "old body");
    }

    #[test]
    fn stale_completion_leaves_newer_edits_dirty() {
        let mut buffer = EditorBuffer::new();
        let first = buffer.edit_body("v1".to_string());
        let pending = buffer.timer_fired(first).unwrap();

        // A keystroke lands while the save is in flight.
        buffer.edit_body("v2".to_string());

        buffer.save_succeeded(&server_note("n1", "Untitled Note", "v1"), pending.generation);
        // The id is adopted, but the buffer is not Clean: v2 still needs its
        // own save.
        assert_eq!(buffer.note_id(), Some("n1"));
        assert_eq!(buffer.state(), SyncState::Dirty);
    }

    #[test]
    fn submit_cancels_the_pending_timer() {
        let mut buffer = EditorBuffer::new();
        let armed = buffer.edit_body("quick".to_string());

        let pending = buffer.submit().unwrap();
        assert_eq!(pending.payload.body, "quick");

        // The debounce timer armed before the submit fires into the void.
        assert_eq!(buffer.timer_fired(armed), None);
    }

    #[test]
    fn switching_notes_abandons_dirty_state() {
        let mut buffer = EditorBuffer::open(&server_note("n1", "One", "alpha"));
        let armed = buffer.edit_body("alpha edited, never saved".to_string());

        let mut buffer = EditorBuffer::open(&server_note("n2", "Two", "beta"));
        assert_eq!(buffer.state(), SyncState::Clean);
        assert_eq!(buffer.body(), "beta");
        assert_eq!(buffer.timer_fired(armed), None);
    }

    #[test]
    fn failed_save_parks_in_error_until_the_next_keystroke() {
        let mut buffer = EditorBuffer::new();
        let generation = buffer.edit_body("doomed".to_string());
        buffer.timer_fired(generation).unwrap();

        buffer.save_failed(generation);
        assert_eq!(buffer.state(), SyncState::SaveError);

        // No automatic retry — but editing re-arms as usual.
        let generation = buffer.edit_body("doomed, take two".to_string());
        assert!(buffer.timer_fired(generation).is_some());
    }
}
