mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod notes;
pub use notes::Notes;

use api::NotesApi;
use ui::Session;

/// Build a REST client for the current session. The API is same-origin in
/// the browser; native shells fall back to a local server.
pub(crate) fn make_client(session: &Session) -> NotesApi {
    let base = api_base();
    match &session.token {
        Some(token) => NotesApi::with_token(base, token.clone()),
        None => NotesApi::new(base),
    }
}

fn api_base() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }
    }
    "http://localhost:3000".to_string()
}
