// src/application/repository.rs
use crate::domain::{Category, DomainError, QuizQuestion, StudyNote, StudyStats};

/// Id-keyed note collection.
///
/// Implementors provide the primitive load/upsert/delete operations; the
/// read views are derived from `all_notes` and keep collection order.
pub trait NoteRepository {
    /// Replace the note with the same id in place, or append it.
    fn save_note(&mut self, note: &StudyNote) -> Result<(), DomainError>;

    /// All notes in collection order. A missing collection is empty.
    fn all_notes(&self) -> Result<Vec<StudyNote>, DomainError>;

    /// Remove the note with `id`. Returns `false` when no such note exists.
    fn delete_note(&mut self, id: &str) -> Result<bool, DomainError>;

    /// Overwrite the whole collection.
    fn replace_notes(&mut self, notes: &[StudyNote]) -> Result<(), DomainError>;

    fn get_note(&self, id: &str) -> Result<Option<StudyNote>, DomainError> {
        Ok(self.all_notes()?.into_iter().find(|n| n.note_id == id))
    }

    fn notes_by_category(&self, category: Category) -> Result<Vec<StudyNote>, DomainError> {
        Ok(self
            .all_notes()?
            .into_iter()
            .filter(|n| n.category == category)
            .collect())
    }

    /// Case-insensitive substring search over title, content and keywords.
    fn search_notes(&self, keyword: &str) -> Result<Vec<StudyNote>, DomainError> {
        Ok(self
            .all_notes()?
            .into_iter()
            .filter(|n| n.matches(keyword))
            .collect())
    }
}

/// Id-keyed question bank.
pub trait QuizRepository {
    /// Replace the question with the same id in place, or append it.
    fn save_quiz(&mut self, quiz: &QuizQuestion) -> Result<(), DomainError>;

    fn all_quizzes(&self) -> Result<Vec<QuizQuestion>, DomainError>;

    fn replace_quizzes(&mut self, quizzes: &[QuizQuestion]) -> Result<(), DomainError>;

    fn get_quiz(&self, id: &str) -> Result<Option<QuizQuestion>, DomainError> {
        Ok(self.all_quizzes()?.into_iter().find(|q| q.question_id == id))
    }

    fn quizzes_by_category(&self, category: Category) -> Result<Vec<QuizQuestion>, DomainError> {
        Ok(self
            .all_quizzes()?
            .into_iter()
            .filter(|q| q.category == category)
            .collect())
    }
}

/// Both collections together, plus the aggregate view over them.
pub trait StudyRepository: NoteRepository + QuizRepository {
    fn stats(&self) -> Result<StudyStats, DomainError> {
        Ok(StudyStats::collect(&self.all_notes()?, &self.all_quizzes()?))
    }
}

impl<T: NoteRepository + QuizRepository> StudyRepository for T {}
