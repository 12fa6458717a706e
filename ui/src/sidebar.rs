//! Sidebar: search box, note list, new-note and logout actions.

use api::models::NoteInfo;
use dioxus::prelude::*;

const SNIPPET_LEN: usize = 35;

#[component]
pub fn Sidebar(
    notes: Vec<NoteInfo>,
    selected: Option<String>,
    filter: String,
    on_filter: EventHandler<String>,
    on_select: EventHandler<String>,
    on_new: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let visible: Vec<NoteInfo> = notes
        .iter()
        .filter(|note| matches_filter(note, &filter))
        .cloned()
        .collect();

    rsx! {
        div {
            class: "sidebar",

            div {
                class: "sidebar-header",
                h1 { class: "sidebar-brand", "QuillNotes" }
                div {
                    class: "sidebar-actions",
                    button {
                        class: "sidebar-new",
                        onclick: move |_| on_new.call(()),
                        "New"
                    }
                    button {
                        class: "sidebar-logout",
                        onclick: move |_| on_logout.call(()),
                        "Log out"
                    }
                }
            }

            input {
                class: "sidebar-search",
                r#type: "search",
                placeholder: "Search notes",
                value: "{filter}",
                oninput: move |evt: FormEvent| on_filter.call(evt.value()),
            }

            div {
                class: "sidebar-list",
                if visible.is_empty() {
                    div { class: "sidebar-empty", "No notes found." }
                }
                for note in visible {
                    div {
                        key: "{note.id}",
                        class: if selected.as_deref() == Some(note.id.as_str()) {
                            "sidebar-item selected"
                        } else {
                            "sidebar-item"
                        },
                        onclick: {
                            let id = note.id.clone();
                            move |_| on_select.call(id.clone())
                        },
                        h3 { class: "sidebar-item-title", "{note.title}" }
                        div {
                            class: "sidebar-item-meta",
                            span { class: "sidebar-item-date", {note.updated_at.format("%b %-d").to_string()} }
                            span { class: "sidebar-item-snippet", {snippet(&note.body)} }
                        }
                    }
                }
            }
        }
    }
}

fn matches_filter(note: &NoteInfo, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    note.title.to_lowercase().contains(&needle) || note.body.to_lowercase().contains(&needle)
}

fn snippet(body: &str) -> String {
    if body.is_empty() {
        return "No additional text".to_string();
    }
    if body.chars().count() > SNIPPET_LEN {
        let cut: String = body.chars().take(SNIPPET_LEN).collect();
        format!("{cut}...")
    } else {
        body.to_string()
    }
}
