//! Notes screen: sidebar plus the auto-saving editor.
//!
//! This view owns the [`EditorBuffer`] view-model and wires its debounce
//! contract to real timers: every keystroke re-arms a one-second window, and
//! the timer that survives issues the create or update. Completions are
//! matched by generation, so a save that raced newer keystrokes leaves them
//! dirty for the next window.

use api::models::NoteInfo;
use api::ClientError;
use dioxus::prelude::*;
use ui::sync::{EditorBuffer, PendingSave, DEBOUNCE_MS};
use ui::{clear_session, use_session, NoteEditor, Session, Sidebar};

use super::make_client;
use crate::Route;

#[component]
pub fn Notes() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut notes = use_signal(Vec::<NoteInfo>::new);
    let mut buffer = use_signal(EditorBuffer::new);
    let mut status = use_signal(String::new);
    let mut filter = use_signal(String::new);

    // Load the note list on mount.
    let _loader = use_resource(move || async move {
        if session.peek().is_logged_in() {
            refresh_notes(session, notes, nav).await;
        }
    });

    // Kick unauthenticated visitors straight to the auth screen. Hooks all
    // run before this so the early return keeps their order stable.
    if !session().is_logged_in() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let on_edit_title = move |value: String| {
        let generation = buffer.write().edit_title(value);
        after_keystroke(generation, session, buffer, notes, status, nav);
    };

    let on_edit_body = move |value: String| {
        let generation = buffer.write().edit_body(value);
        after_keystroke(generation, session, buffer, notes, status, nav);
    };

    let on_submit = move |_| {
        let pending = buffer.write().submit();
        if let Some(pending) = pending {
            status.set("Saving...".to_string());
            spawn(async move {
                run_save(pending, session, buffer, notes, status, nav).await;
            });
        }
    };

    // Selecting another note (or starting a new one) abandons any dirty
    // state of the previous buffer: deliberate last-write-wins.
    let on_select = move |id: String| {
        if let Some(note) = notes().iter().find(|n| n.id == id) {
            buffer.set(EditorBuffer::open(note));
            status.set(String::new());
        }
    };

    let on_new = move |_| {
        buffer.set(EditorBuffer::new());
        status.set(String::new());
    };

    let on_delete = move |_| {
        if !confirm_delete() {
            return;
        }
        let Some(id) = buffer().note_id().map(str::to_string) else {
            return;
        };
        spawn(async move {
            match make_client(&session()).delete_note(&id).await {
                Ok(()) => {
                    buffer.set(EditorBuffer::new());
                    status.set(String::new());
                    refresh_notes(session, notes, nav).await;
                }
                Err(ClientError::Unauthorized) => force_logout(session, nav),
                Err(err) => {
                    tracing::error!("failed to delete note: {err}");
                    status.set("Error deleting!".to_string());
                }
            }
        });
    };

    let on_logout = move |_| {
        force_logout(session, nav);
    };

    let current = buffer();
    let date_label = match current.note_id() {
        Some(id) => notes()
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.updated_at.format("%B %-d, %Y, %-I:%M %p").to_string())
            .unwrap_or_default(),
        None => "New note".to_string(),
    };

    rsx! {
        div {
            class: "notes-layout",

            Sidebar {
                notes: notes(),
                selected: current.note_id().map(str::to_string),
                filter: filter(),
                on_filter: move |value: String| filter.set(value),
                on_select: on_select,
                on_new: on_new,
                on_logout: on_logout,
            }

            NoteEditor {
                title: current.title().to_string(),
                body: current.body().to_string(),
                status: status(),
                date_label: date_label,
                can_delete: current.note_id().is_some(),
                on_edit_title: on_edit_title,
                on_edit_body: on_edit_body,
                on_submit: on_submit,
                on_delete: on_delete,
            }
        }
    }
}

/// A keystroke happened: surface it, mirror it into the sidebar, and arm a
/// fresh debounce timer for `generation`. Earlier timers keep running but
/// their generations are stale, so only the last one saves.
fn after_keystroke(
    generation: u64,
    session: Signal<Session>,
    mut buffer: Signal<EditorBuffer>,
    notes: Signal<Vec<NoteInfo>>,
    mut status: Signal<String>,
    nav: Navigator,
) {
    status.set("Typing...".to_string());
    mirror_into_list(buffer, notes);
    spawn(async move {
        ui::sleep_ms(DEBOUNCE_MS).await;
        let pending = buffer.write().timer_fired(generation);
        if let Some(pending) = pending {
            status.set("Saving...".to_string());
            run_save(pending, session, buffer, notes, status, nav).await;
        }
    });
}

/// Keep the sidebar text in step with live edits of an already-saved note.
fn mirror_into_list(buffer: Signal<EditorBuffer>, mut notes: Signal<Vec<NoteInfo>>) {
    let current = buffer();
    let Some(id) = current.note_id() else {
        return;
    };
    let mut list = notes.write();
    if let Some(note) = list.iter_mut().find(|n| n.id == id) {
        note.title = current.title().to_string();
        note.body = current.body().to_string();
    }
}

async fn run_save(
    pending: PendingSave,
    session: Signal<Session>,
    mut buffer: Signal<EditorBuffer>,
    notes: Signal<Vec<NoteInfo>>,
    mut status: Signal<String>,
    nav: Navigator,
) {
    let client = make_client(&session());
    let result = match &pending.note_id {
        Some(id) => client.update_note(id, &pending.payload).await,
        None => client.create_note(&pending.payload).await,
    };

    match result {
        Ok(saved) => {
            buffer.write().save_succeeded(&saved, pending.generation);
            status.set("All changes saved".to_string());
            refresh_notes(session, notes, nav).await;
            // Clear the flash after two seconds unless something replaced it.
            spawn(async move {
                ui::sleep_ms(2_000).await;
                if status() == "All changes saved" {
                    status.set(String::new());
                }
            });
        }
        Err(ClientError::Unauthorized) => force_logout(session, nav),
        Err(err) => {
            tracing::error!("failed to save note: {err}");
            buffer.write().save_failed(pending.generation);
            status.set("Error saving!".to_string());
        }
    }
}

async fn refresh_notes(
    session: Signal<Session>,
    mut notes: Signal<Vec<NoteInfo>>,
    nav: Navigator,
) {
    match make_client(&session()).list_notes().await {
        Ok(list) => notes.set(list),
        Err(ClientError::Unauthorized) => force_logout(session, nav),
        Err(err) => tracing::error!("failed to load notes: {err}"),
    }
}

/// An unauthorized response means the token is gone or expired: drop it and
/// redisplay the auth screen.
fn force_logout(session: Signal<Session>, nav: Navigator) {
    clear_session(session);
    nav.replace(Route::Login {});
}

fn confirm_delete() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message("Delete this note?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}
