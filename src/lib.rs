#![deny(clippy::cargo)]
#![deny(clippy::complexity)]
#![deny(clippy::correctness)]
#![deny(clippy::nursery)]
#![deny(clippy::perf)]
#![deny(clippy::style)]
#![deny(clippy::suspicious)]
#![deny(clippy::pedantic)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod api;
pub mod app;
pub mod backends;
pub mod setup;

// More convenient Result type
pub type Result<T> = std::result::Result<T, NoteError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub description: String,
    pub completed: bool,
}

/// Trait to be implemented by all backends that manage storing and retrieving notes
///
/// Backends are shared between request tasks, so they must be `Send + Sync` and
/// guard their own state.
pub trait NoteBackend: Send + Sync {
    /// Returns every note in ascending ID order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    fn list(&self) -> Result<Vec<Note>>;

    /// Fetches a note by ID
    ///
    /// # Errors
    ///
    /// Returns `NoteValidationError::NoteNotFound` if the note does not exist,
    /// or a backend error if the query fails
    fn get(&self, id: i64) -> Result<Note>;

    /// Stores a new note under the next free ID and returns it
    ///
    /// # Errors
    ///
    /// Returns an error if the note could not be inserted
    fn create(&self, description: String, completed: bool) -> Result<Note>;

    /// Flips the completion flag of a note and returns the updated note
    ///
    /// # Errors
    ///
    /// Returns `NoteValidationError::NoteNotFound` if the note does not exist,
    /// or a backend error if the update fails
    fn toggle_completed(&self, id: i64) -> Result<Note>;

    /// Replaces the description of a note and returns the updated note
    ///
    /// # Errors
    ///
    /// Returns `NoteValidationError::NoteNotFound` if the note does not exist,
    /// or a backend error if the update fails
    fn update_description(&self, id: i64, description: String) -> Result<Note>;

    /// Removes a note and returns it as it was before deletion
    ///
    /// # Errors
    ///
    /// Returns `NoteValidationError::NoteNotFound` if the note does not exist,
    /// or a backend error if the deletion fails
    fn delete(&self, id: i64) -> Result<Note>;
}

// Enum for all possible validation or repository-related errors
#[derive(Debug, Error)]
pub enum NoteError {
    #[error(transparent)]
    Validation(#[from] NoteValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

// Enum for all possible data and input validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteValidationError {
    #[error("Description is empty")]
    DescriptionEmpty,

    #[error("Note not found with ID: {0}")]
    NoteNotFound(i64),
}

// Enum for all possible repository/backend errors
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed opening database at '{0}'")]
    DatabaseCreationError(String),

    #[error("Failed creating `notes` table in database")]
    TableCreationError,

    #[error("Backend connection timed out")]
    Timeout,

    #[error("Insufficient permissions")]
    PermissionDenied,

    #[error("Database file is not a valid SQLite database")]
    NotADatabase,

    #[error("Database schema has changed unexpectedly")]
    SchemaChanged,

    #[error("Note store lock was poisoned by a panicking writer")]
    LockPoisoned,

    #[error(transparent)]
    Other(#[from] anyhow::Error), // Used as fallback
}

impl NoteError {
    /// Shorthand for the not-found outcome shared by every backend
    #[must_use]
    pub const fn not_found(id: i64) -> Self {
        Self::Validation(NoteValidationError::NoteNotFound(id))
    }

    /// True when the error means no note has the requested ID
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Validation(NoteValidationError::NoteNotFound(_))
        )
    }
}
