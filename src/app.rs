use crate::{Note, NoteBackend, NoteValidationError, Result};
use log::{info, trace};

pub struct NoteService {
    repo: Box<dyn NoteBackend>,
}

impl NoteService {
    #[must_use]
    pub fn new(repo: Box<dyn NoteBackend>) -> Self {
        Self { repo }
    }

    /// Retrieve all notes in insertion order
    ///
    /// # Errors
    ///
    /// Forwards backend failures
    pub fn list_notes(&self) -> Result<Vec<Note>> {
        let notes = self.repo.list()?;
        trace!("Listed {} notes", notes.len());
        Ok(notes)
    }

    /// Fetch a single note by ID
    ///
    /// # Errors
    ///
    /// `NoteValidationError::NoteNotFound` if the ID is unknown, otherwise backend failures
    pub fn get_note(&self, id: i64) -> Result<Note> {
        trace!("Looking up note with ID: {id}");
        self.repo.get(id)
    }

    /// Create a new note after validating the description
    ///
    /// # Errors
    ///
    /// `NoteValidationError::DescriptionEmpty` if the description is empty; the
    /// backend is not touched in that case
    pub fn create_note(&self, description: String, completed: bool) -> Result<Note> {
        Self::validate_description(&description)?;

        let note = self.repo.create(description, completed)?;
        info!("Note saved with ID: {}", note.id);
        Ok(note)
    }

    /// Flip the completion flag of a note
    ///
    /// # Errors
    ///
    /// `NoteValidationError::NoteNotFound` if the ID is unknown, otherwise backend failures
    pub fn toggle_completed(&self, id: i64) -> Result<Note> {
        let note = self.repo.toggle_completed(id)?;
        info!("Note {} marked completed={}", note.id, note.completed);
        Ok(note)
    }

    /// Replace the description of a note
    ///
    /// Empty descriptions are rejected the same way they are on create.
    ///
    /// # Errors
    ///
    /// `NoteValidationError::DescriptionEmpty` for an empty description,
    /// `NoteValidationError::NoteNotFound` if the ID is unknown, otherwise backend failures
    pub fn update_description(&self, id: i64, description: String) -> Result<Note> {
        Self::validate_description(&description)?;

        let note = self.repo.update_description(id, description)?;
        info!("Note {} description updated", note.id);
        Ok(note)
    }

    /// Delete a note, returning it as it was
    ///
    /// # Errors
    ///
    /// `NoteValidationError::NoteNotFound` if the ID is unknown, otherwise backend failures
    pub fn delete_note(&self, id: i64) -> Result<Note> {
        let note = self.repo.delete(id)?;
        info!("Note {} deleted", note.id);
        Ok(note)
    }

    // --- small helpers ---

    /// Validate note description
    ///
    /// # Errors
    ///
    /// `NoteValidationError::DescriptionEmpty` if the description is empty
    pub fn validate_description(description: &str) -> Result<()> {
        if description.is_empty() {
            Err(NoteValidationError::DescriptionEmpty.into())
        } else {
            Ok(())
        }
    }
}
