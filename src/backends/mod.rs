pub mod memory;
pub mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

pub use crate::{BackendError, Note, NoteBackend, NoteError, Result};
