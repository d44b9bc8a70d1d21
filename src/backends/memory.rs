use super::{BackendError, Note, NoteBackend, NoteError, Result};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug)]
struct Notes {
    notes: Vec<Note>,
    next_id: i64,
}

/// Keeps notes in process memory, in insertion order
///
/// Lookups are a linear scan. IDs come from a counter that only moves forward,
/// so a deleted note's ID is never handed out again.
#[derive(Debug)]
pub struct MemoryBackend {
    state: Mutex<Notes>,
}

impl MemoryBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(Notes {
                notes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Notes>> {
        self.state
            .lock()
            .map_err(|_| NoteError::Backend(BackendError::LockPoisoned))
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Notes {
    fn position(&self, id: i64) -> Result<usize> {
        self.notes
            .iter()
            .position(|note| note.id == id)
            .ok_or_else(|| NoteError::not_found(id))
    }
}

impl NoteBackend for MemoryBackend {
    fn list(&self) -> Result<Vec<Note>> {
        Ok(self.lock()?.notes.clone())
    }

    fn get(&self, id: i64) -> Result<Note> {
        let state = self.lock()?;
        let index = state.position(id)?;
        Ok(state.notes[index].clone())
    }

    fn create(&self, description: String, completed: bool) -> Result<Note> {
        let mut state = self.lock()?;
        let note = Note {
            id: state.next_id,
            description,
            completed,
        };
        state.next_id += 1;
        state.notes.push(note.clone());
        Ok(note)
    }

    fn toggle_completed(&self, id: i64) -> Result<Note> {
        let mut state = self.lock()?;
        let index = state.position(id)?;
        let note = &mut state.notes[index];
        note.completed = !note.completed;
        Ok(note.clone())
    }

    fn update_description(&self, id: i64, description: String) -> Result<Note> {
        let mut state = self.lock()?;
        let index = state.position(id)?;
        let note = &mut state.notes[index];
        note.description = description;
        Ok(note.clone())
    }

    fn delete(&self, id: i64) -> Result<Note> {
        let mut state = self.lock()?;
        let index = state.position(id)?;
        Ok(state.notes.remove(index))
    }
}
