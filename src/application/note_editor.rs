// src/application/note_editor.rs
use crate::application::NoteRepository;
use crate::domain::{Category, DomainError, Importance, StudyNote};
use tracing::{info, instrument};

/// Input for a new note. Optional fields fall back to the note defaults.
#[derive(Debug, Clone)]
pub struct NoteDraft {
    pub title: String,
    pub category: Category,
    pub content: String,
    pub subcategory: String,
    pub keywords: Vec<String>,
    pub importance: Importance,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, category: Category, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category,
            content: content.into(),
            subcategory: String::new(),
            keywords: Vec::new(),
            importance: Importance::default(),
        }
    }
}

/// Partial update; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub subcategory: Option<String>,
    pub content: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub importance: Option<Importance>,
}

pub struct NoteEditor<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteEditor<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[instrument(level = "debug", skip(self, draft), fields(title = %draft.title))]
    pub fn create_note(&mut self, draft: NoteDraft) -> Result<StudyNote, DomainError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidNote("title must not be empty".to_string()));
        }
        if draft.content.trim().is_empty() {
            return Err(DomainError::InvalidNote("content must not be empty".to_string()));
        }

        let note = StudyNote::new(title, draft.category, draft.content)
            .with_subcategory(draft.subcategory.trim())
            .with_keywords(draft.keywords)
            .with_importance(draft.importance);
        self.repository.save_note(&note)?;

        info!(note_id = %note.note_id, "Saved new note");
        Ok(note)
    }

    /// Apply `changes` to an existing note. `None` when the id is unknown.
    #[instrument(level = "debug", skip(self, changes))]
    pub fn edit_note(
        &mut self,
        note_id: &str,
        changes: NoteChanges,
    ) -> Result<Option<StudyNote>, DomainError> {
        let Some(mut note) = self.repository.get_note(note_id)? else {
            return Ok(None);
        };

        if let Some(title) = changes.title.filter(|t| !t.trim().is_empty()) {
            note.title = title.trim().to_string();
        }
        if let Some(subcategory) = changes.subcategory {
            note.subcategory = subcategory.trim().to_string();
        }
        if let Some(content) = changes.content.filter(|c| !c.trim().is_empty()) {
            note.content = content;
        }
        if let Some(keywords) = changes.keywords {
            note.keywords = keywords;
        }
        if let Some(importance) = changes.importance {
            note.importance = importance;
        }
        note.touch();

        self.repository.save_note(&note)?;
        info!(note_id, "Updated note");
        Ok(Some(note))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockStudyRepository;

    #[test]
    fn given_valid_draft_when_creating_then_note_is_saved_with_defaults() {
        // Arrange
        let mut editor = NoteEditor::new(MockStudyRepository::builder().build());
        let draft = NoteDraft::new("  대칭키 vs 비대칭키  ", Category::General, "AES, RSA");

        // Act
        let note = editor.create_note(draft).unwrap();

        // Assert
        assert_eq!(note.title, "대칭키 vs 비대칭키");
        assert_eq!(note.importance.value(), 3);
        assert_eq!(editor.repository.all_notes().unwrap(), vec![note]);
    }

    #[test]
    fn given_blank_title_when_creating_then_rejected() {
        let mut editor = NoteEditor::new(MockStudyRepository::builder().build());

        let result = editor.create_note(NoteDraft::new(" ", Category::System, "내용"));

        assert!(matches!(result, Err(DomainError::InvalidNote(_))));
        assert!(editor.repository.all_notes().unwrap().is_empty());
    }

    #[test]
    fn given_partial_changes_when_editing_then_only_those_fields_change() {
        // Arrange
        let note = StudyNote::new("ISMS", Category::ManagementAndLaw, "관리체계 인증")
            .with_keywords(["ISMS-P"]);
        let id = note.note_id.clone();
        let mut editor = NoteEditor::new(MockStudyRepository::builder().with_note(note).build());

        // Act
        let edited = editor
            .edit_note(
                &id,
                NoteChanges {
                    importance: Some(Importance::new(5)),
                    title: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap()
            .expect("note should exist");

        // Assert
        assert_eq!(edited.title, "ISMS");
        assert_eq!(edited.importance.value(), 5);
        assert_eq!(edited.keywords, vec!["ISMS-P"]);
        assert_eq!(editor.repository.all_notes().unwrap().len(), 1);
    }

    #[test]
    fn given_unknown_id_when_editing_then_returns_none() {
        let mut editor = NoteEditor::new(MockStudyRepository::builder().build());

        let result = editor.edit_note("nonexist", NoteChanges::default()).unwrap();

        assert!(result.is_none());
    }
}
