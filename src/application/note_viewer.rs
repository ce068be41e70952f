// src/application/note_viewer.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, StudyNote};
use tracing::{debug, instrument};

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Open a note for reading. Counts as a review and is persisted.
    #[instrument(level = "debug", skip(self))]
    pub fn view_note(&mut self, note_id: &str) -> Result<Option<StudyNote>, DomainError> {
        let Some(mut note) = self.repository.get_note(note_id)? else {
            debug!(note_id, "Note not found");
            return Ok(None);
        };
        note.record_review();
        self.repository.save_note(&note)?;
        Ok(Some(note))
    }

    /// Flip the mastered flag of a note.
    pub fn toggle_mastered(&mut self, note_id: &str) -> Result<Option<StudyNote>, DomainError> {
        let Some(mut note) = self.repository.get_note(note_id)? else {
            return Ok(None);
        };
        note.toggle_mastered();
        self.repository.save_note(&note)?;
        Ok(Some(note))
    }
}
