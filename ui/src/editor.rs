//! Editor pane: title, body, status line, word count.

use dioxus::prelude::*;

/// Presentation-only editor component. The notes view owns the
/// [`crate::sync::EditorBuffer`] and feeds text/status down; keystrokes and
/// actions flow back up through the handlers.
#[component]
pub fn NoteEditor(
    title: String,
    body: String,
    status: String,
    date_label: String,
    can_delete: bool,
    on_edit_title: EventHandler<String>,
    on_edit_body: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let words = word_count(&body);
    let chars = body.trim().chars().count();

    rsx! {
        div {
            class: "editor-pane",

            div {
                class: "editor-header",
                input {
                    class: "editor-title",
                    r#type: "text",
                    placeholder: "Title",
                    value: "{title}",
                    oninput: move |evt: FormEvent| on_edit_title.call(evt.value()),
                }
                if can_delete {
                    button {
                        class: "editor-delete",
                        title: "Delete note",
                        onclick: move |_| on_delete.call(()),
                        "Delete"
                    }
                }
            }

            div {
                class: "editor-meta",
                span { class: "editor-date", "{date_label}" }
                span { class: "editor-status", "{status}" }
            }

            textarea {
                class: "editor-body",
                placeholder: "Start writing...",
                value: "{body}",
                oninput: move |evt: FormEvent| on_edit_body.call(evt.value()),
            }

            div {
                class: "editor-footer",
                span {
                    class: "editor-word-count",
                    if words == 1 { "1 word | {chars} chars" } else { "{words} words | {chars} chars" }
                }
                button {
                    class: "editor-done",
                    onclick: move |_| on_submit.call(()),
                    "Done"
                }
            }
        }
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
