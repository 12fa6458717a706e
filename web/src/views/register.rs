//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::use_session;

use super::make_client;
use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if session().is_logged_in() {
        nav.replace(Route::Notes {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            match make_client(&session()).register(&e, &p).await {
                Ok(()) => {
                    // Account created; sign in from the login screen.
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-screen",

            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle", "Start securing your notes" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                input {
                    class: "auth-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "auth-input",
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    class: "auth-input",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Please wait..." } else { "Sign Up" }
                }
            }

            p {
                class: "auth-toggle",
                "Already have an account? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
