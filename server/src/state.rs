//! Shared application state for the Axum router.

use std::sync::Arc;

use api::auth::token::TokenKeys;
use api::repo::{NoteStore, UserStore};

/// Application-wide state shared across all routes. The stores are trait
/// objects so tests can run the real router over in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub notes: Arc<dyn NoteStore>,
    pub keys: Arc<TokenKeys>,
}
