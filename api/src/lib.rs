//! # API crate — shared types and logic for QuillNotes
//!
//! This crate is shared between the Axum backend and the Dioxus frontends. It
//! defines the wire types both sides agree on, the REST client the frontends
//! call, and — behind the `server` feature gate so WASM builds never pull in
//! SQLx or Argon2 — the database models, stores, and credential logic.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Password hashing (Argon2id) and bearer-token issuance/verification |
//! | [`client`] | `client` | REST client used by the web frontend |
//! | [`db`] | `server` | PostgreSQL connection pool and schema bootstrap |
//! | [`error`] | `server` | Store-level error taxonomy |
//! | [`models`] | — | Database rows (`User`, `Note`) and their client-safe projections |
//! | [`repo`] | `server` | `UserStore`/`NoteStore` traits and their PostgreSQL implementations |

use serde::{Deserialize, Serialize};

pub mod auth;
#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;
#[cfg(feature = "server")]
pub mod repo;

#[cfg(feature = "client")]
pub use client::{ClientError, NotesApi};
pub use models::{NoteInfo, NotePayload, UserInfo};

/// Request body for both register and login. Fields default to empty so a
/// missing field surfaces as a validation failure rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login: the bearer token plus the profile it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Generic `{"message": …}` body used for confirmations and every error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}
