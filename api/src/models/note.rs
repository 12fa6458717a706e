//! # Note model
//!
//! [`Note`] is the server-side `notes` row. [`NoteInfo`] and [`NotePayload`]
//! are the wire shapes: the deployed frontend sends and receives `Title` and
//! `Document` with capitalized field names, and timestamps as `createdAt` /
//! `updatedAt`, so those names are pinned here with serde renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Title stored when a save arrives with an empty one.
pub const UNTITLED: &str = "Untitled Note";

/// Full note record from the database. Every note has exactly one owner.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Note {
    /// Convert to NoteInfo for client consumption. The owner is implied by
    /// the authenticated caller and never serialized.
    pub fn to_info(&self) -> NoteInfo {
        NoteInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            body: self.body.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Note as it crosses the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteInfo {
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Document")]
    pub body: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Request body for note create/update. Omitted fields deserialize to empty
/// strings: an update always replaces both title and body, never preserving
/// the stored value of a field the caller left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotePayload {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Document", default)]
    pub body: String,
}

/// Apply the empty-title default.
pub fn normalize_title(title: &str) -> String {
    if title.trim().is_empty() {
        UNTITLED.to_string()
    } else {
        title.to_string()
    }
}
