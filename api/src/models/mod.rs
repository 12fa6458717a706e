//! Data models for the application.

pub mod note;
mod user;

#[cfg(feature = "server")]
pub use note::Note;
pub use note::{NoteInfo, NotePayload};
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
