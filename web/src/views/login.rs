//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{store_session, use_session};

use super::make_client;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the notes.
    if session().is_logged_in() {
        nav.replace(Route::Notes {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match make_client(&session()).login(&e, &p).await {
                Ok(response) => {
                    store_session(session, response.token, response.user);
                    nav.replace(Route::Notes {});
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

            h1 { class: "auth-title", "Welcome back" }
            p { class: "auth-subtitle", "Sign in to your private notes" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

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
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Please wait..." } else { "Login" }
                }
            }

            p {
                class: "auth-toggle",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
