// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::{Category, DomainError, StudyNote};

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List all notes, or only those of one category
    pub fn list_notes(&self, category: Option<Category>) -> Result<Vec<StudyNote>, DomainError> {
        match category {
            Some(category) => self.repository.notes_by_category(category),
            None => self.repository.all_notes(),
        }
    }

    /// Search title, content and keywords
    ///
    /// # Arguments
    /// * `keyword` - Search term; blank input yields no results without
    ///   touching the repository
    pub fn search_notes(&self, keyword: &str) -> Result<Vec<StudyNote>, DomainError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }
        self.repository.search_notes(keyword)
    }
}

/// Group notes by category, preserving collection order within a group
pub fn group_by_category(notes: Vec<StudyNote>) -> Vec<(Category, Vec<StudyNote>)> {
    let mut groups: Vec<(Category, Vec<StudyNote>)> = Vec::new();
    for note in notes {
        match groups.iter_mut().find(|(c, _)| *c == note.category) {
            Some((_, group)) => group.push(note),
            None => groups.push((note.category, vec![note])),
        }
    }
    groups
}
