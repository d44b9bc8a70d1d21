use super::{BackendError, Note, NoteBackend, NoteError, Result};
use log::{debug, error};
use rusqlite::{Connection, Error as SqliteError, ErrorCode, OptionalExtension, Row, params};
use std::path::{Path, PathBuf};

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS notes (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        description TEXT NOT NULL,
        completed   INTEGER NOT NULL CHECK (completed IN (0, 1))
    )
";

/// Stores notes in a single `SQLite` table
///
/// A fresh connection is opened for every operation, so no state is held
/// between requests apart from the database file itself.
#[derive(Debug)]
pub struct SqliteBackend {
    path: PathBuf,
}

impl SqliteBackend {
    /// Creates a new `SqliteBackend` for the database at the given path.
    /// Also ensures that the `notes` table exists.
    ///
    /// # Errors
    ///
    /// - `BackendError::DatabaseCreationError` if the database file cannot be opened
    /// - `BackendError::TableCreationError` if the `notes` table cannot be created
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let connection = Connection::open(&path).map_err(|e| {
            error!("Failed opening DB at '{}': {e}", path.display());
            BackendError::DatabaseCreationError(path.display().to_string())
        })?;

        connection.execute(CREATE_TABLE, []).map_err(|e| {
            error!("Failed creating notes table: {e}");
            BackendError::TableCreationError
        })?;
        debug!("Table `notes` ready in '{}'", path.display());

        Ok(Self { path })
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path).map_err(map_sqlite_error)
    }
}

/// Maps a `rusqlite::Error` into a `NoteError`, wrapping known SQLite-specific codes into domain-specific variants.
///
/// This function is used internally by all database operations.
fn map_sqlite_error(e: SqliteError) -> NoteError {
    match e {
        SqliteError::SqliteFailure(code, _) => match code.code {
            ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => {
                NoteError::Backend(BackendError::Timeout)
            }
            ErrorCode::PermissionDenied | ErrorCode::ReadOnly => {
                NoteError::Backend(BackendError::PermissionDenied)
            }
            ErrorCode::NotADatabase => NoteError::Backend(BackendError::NotADatabase),
            ErrorCode::SchemaChanged => NoteError::Backend(BackendError::SchemaChanged),
            _ => NoteError::Backend(BackendError::Other(anyhow::anyhow!(
                "SQLite error: {:?}",
                code
            ))),
        },
        other => NoteError::Backend(BackendError::Other(anyhow::Error::new(other))),
    }
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        description: row.get(1)?,
        completed: row.get(2)?,
    })
}

impl NoteBackend for SqliteBackend {
    /// Returns all notes sorted by primary key.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the query fails or the data cannot be retrieved.
    fn list(&self) -> Result<Vec<Note>> {
        let connection = self.connect()?;
        let mut stmt = connection
            .prepare("SELECT id, description, completed FROM notes ORDER BY id ASC")
            .map_err(map_sqlite_error)?;

        let notes_iter = stmt
            .query_map([], note_from_row)
            .map_err(map_sqlite_error)?;

        notes_iter
            .collect::<std::result::Result<_, _>>()
            .map_err(map_sqlite_error)
    }

    fn get(&self, id: i64) -> Result<Note> {
        self.connect()?
            .query_row(
                "SELECT id, description, completed FROM notes WHERE id = ?1",
                [id],
                note_from_row,
            )
            .optional()
            .map_err(map_sqlite_error)?
            .ok_or_else(|| NoteError::not_found(id))
    }

    /// Inserts a new note and reads back the ID assigned by `AUTOINCREMENT`.
    ///
    /// # Errors
    ///
    /// Returns mapped `SQLite` errors, or `BackendError::Other` for unknown failures.
    fn create(&self, description: String, completed: bool) -> Result<Note> {
        let connection = self.connect()?;
        connection
            .execute(
                "INSERT INTO notes (description, completed) VALUES (?1, ?2)",
                params![description, completed],
            )
            .map_err(map_sqlite_error)?;

        Ok(Note {
            id: connection.last_insert_rowid(),
            description,
            completed,
        })
    }

    fn toggle_completed(&self, id: i64) -> Result<Note> {
        self.connect()?
            .query_row(
                "UPDATE notes SET completed = 1 - completed WHERE id = ?1
                 RETURNING id, description, completed",
                [id],
                note_from_row,
            )
            .optional()
            .map_err(map_sqlite_error)?
            .ok_or_else(|| NoteError::not_found(id))
    }

    fn update_description(&self, id: i64, description: String) -> Result<Note> {
        self.connect()?
            .query_row(
                "UPDATE notes SET description = ?1 WHERE id = ?2
                 RETURNING id, description, completed",
                params![description, id],
                note_from_row,
            )
            .optional()
            .map_err(map_sqlite_error)?
            .ok_or_else(|| NoteError::not_found(id))
    }

    /// Deletes a note by ID and returns the removed row.
    ///
    /// # Errors
    ///
    /// Returns `NoteValidationError::NoteNotFound` if no row matched, or a mapped
    /// backend error if the deletion fails.
    fn delete(&self, id: i64) -> Result<Note> {
        self.connect()?
            .query_row(
                "DELETE FROM notes WHERE id = ?1 RETURNING id, description, completed",
                [id],
                note_from_row,
            )
            .optional()
            .map_err(map_sqlite_error)?
            .ok_or_else(|| NoteError::not_found(id))
    }
}
