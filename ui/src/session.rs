//! Session context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;

const TOKEN_KEY: &str = "token";

/// Authentication state for the application. The token is the only part that
/// survives a reload (browser local storage); the profile is re-populated at
/// login.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Get the current session state.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that owns the session state. Wrap the app with this to
/// enable [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| Session {
        token: load_token(),
        user: None,
    });
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Record a successful login.
pub fn store_session(mut session: Signal<Session>, token: String, user: UserInfo) {
    save_token(&token);
    session.set(Session {
        token: Some(token),
        user: Some(user),
    });
}

/// Drop the credential and return to the logged-out state.
pub fn clear_session(mut session: Signal<Session>) {
    remove_token();
    session.set(Session::default());
}

fn load_token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn save_token(token: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = token;
}

fn remove_token() {
    #[cfg(target_arch = "wasm32")]
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
