//! This crate contains all shared UI for the workspace: the session context,
//! the sidebar and editor components, and the auto-save engine they drive.

mod editor;
mod session;
mod sidebar;
pub mod sync;

pub use editor::NoteEditor;
pub use session::{clear_session, store_session, use_session, Session, SessionProvider};
pub use sidebar::Sidebar;

/// Sleep helper shared by the debounce timer and status flashes: browser
/// timers on WASM, Tokio elsewhere (desktop shells, unit tests).
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}
