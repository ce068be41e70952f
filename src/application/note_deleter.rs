// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::DomainError;
use tracing::{debug, info};

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note, returning whether anything was removed
    pub fn delete_note(&mut self, note_id: &str) -> Result<bool, DomainError> {
        let removed = self.repository.delete_note(note_id)?;
        if removed {
            info!(note_id, "Deleted note");
        } else {
            debug!(note_id, "No note to delete");
        }
        Ok(removed)
    }
}
