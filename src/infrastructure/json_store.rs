// src/infrastructure/json_store.rs
use crate::application::{NoteRepository, QuizRepository};
use crate::constants::{NOTES_FILE, QUIZ_FILE, STATS_FILE};
use crate::domain::{DomainError, QuizQuestion, StudyNote};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// Flat JSON collections under one data directory.
///
/// Every call reads the whole backing file and every write rewrites it.
/// Writes land in a temporary file next to the target which is then renamed
/// over it, so an interrupted save keeps the previous version.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        debug!(?data_dir, "Creating JsonStore");
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn notes_path(&self) -> PathBuf {
        self.data_dir.join(NOTES_FILE)
    }

    pub fn quiz_path(&self) -> PathBuf {
        self.data_dir.join(QUIZ_FILE)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join(STATS_FILE)
    }

    #[instrument(level = "trace", skip(self))]
    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>, DomainError> {
        if !path.exists() {
            debug!(?path, "Collection file missing, treating as empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DomainError::StorageError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            DomainError::StorageError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    #[instrument(level = "trace", skip(self, records), fields(count = records.len()))]
    fn write<T: Serialize>(&self, path: &Path, records: &[T]) -> Result<(), DomainError> {
        let io_error = |e: std::io::Error| {
            DomainError::StorageError(format!("Failed to write {}: {}", path.display(), e))
        };

        fs::create_dir_all(&self.data_dir).map_err(io_error)?;

        let json = serde_json::to_string_pretty(records).map_err(|e| {
            DomainError::StorageError(format!("Failed to serialize {}: {}", path.display(), e))
        })?;

        let mut temp = NamedTempFile::new_in(&self.data_dir).map_err(io_error)?;
        temp.write_all(json.as_bytes()).map_err(io_error)?;
        temp.flush().map_err(io_error)?;
        temp.persist(path).map_err(|e| io_error(e.error))?;

        debug!(?path, "Wrote collection");
        Ok(())
    }
}

/// Replace the record matching `same_id` in place, or append it.
fn upsert<T: Clone>(records: &mut Vec<T>, record: &T, same_id: impl Fn(&T) -> bool) {
    match records.iter_mut().find(|r| same_id(r)) {
        Some(existing) => *existing = record.clone(),
        None => records.push(record.clone()),
    }
}

impl NoteRepository for JsonStore {
    #[instrument(level = "debug", skip(self, note), fields(note_id = %note.note_id))]
    fn save_note(&mut self, note: &StudyNote) -> Result<(), DomainError> {
        let path = self.notes_path();
        let mut notes: Vec<StudyNote> = self.load(&path)?;
        upsert(&mut notes, note, |n| n.note_id == note.note_id);
        self.write(&path, &notes)
    }

    fn all_notes(&self) -> Result<Vec<StudyNote>, DomainError> {
        self.load(&self.notes_path())
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: &str) -> Result<bool, DomainError> {
        let path = self.notes_path();
        let mut notes: Vec<StudyNote> = self.load(&path)?;
        let before = notes.len();
        notes.retain(|n| n.note_id != id);
        if notes.len() == before {
            return Ok(false);
        }
        self.write(&path, &notes)?;
        Ok(true)
    }

    fn replace_notes(&mut self, notes: &[StudyNote]) -> Result<(), DomainError> {
        self.write(&self.notes_path(), notes)
    }
}

impl QuizRepository for JsonStore {
    #[instrument(level = "debug", skip(self, quiz), fields(question_id = %quiz.question_id))]
    fn save_quiz(&mut self, quiz: &QuizQuestion) -> Result<(), DomainError> {
        let path = self.quiz_path();
        let mut quizzes: Vec<QuizQuestion> = self.load(&path)?;
        upsert(&mut quizzes, quiz, |q| q.question_id == quiz.question_id);
        self.write(&path, &quizzes)
    }

    fn all_quizzes(&self) -> Result<Vec<QuizQuestion>, DomainError> {
        self.load(&self.quiz_path())
    }

    fn replace_quizzes(&mut self, quizzes: &[QuizQuestion]) -> Result<(), DomainError> {
        self.write(&self.quiz_path(), quizzes)
    }
}
