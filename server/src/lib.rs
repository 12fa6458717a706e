//! Axum backend for QuillNotes.
//!
//! The binary in `main.rs` wires settings, the PostgreSQL stores, and the
//! token keys into [`state::AppState`] and serves [`routes::router`].
//! Everything here is also usable from integration tests, which swap the
//! stores for in-memory implementations.

pub mod error;
pub mod extract;
pub mod routes;
pub mod settings;
pub mod state;
