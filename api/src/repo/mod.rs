//! Store traits and their PostgreSQL implementations.
//!
//! Handlers talk to [`UserStore`] and [`NoteStore`]; production wires in the
//! `Pg*` implementations, integration tests supply in-memory ones.

mod notes;
mod users;

pub use notes::{NoteStore, PgNoteStore};
pub use users::{PgUserStore, UserStore};
