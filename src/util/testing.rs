// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteRepository, QuizRepository};
use crate::domain::{DomainError, QuizQuestion, StudyNote};

/// In-memory repository for testing use cases without touching the disk
///
/// Keeps both collections in insertion order with the same upsert and
/// delete semantics as the JSON store. Writes can be made to fail to
/// exercise error paths.
///
/// # Examples
///
/// ```
/// use studybot::util::testing::MockStudyRepository;
/// use studybot::application::NoteRepository;
/// use studybot::domain::{Category, StudyNote};
///
/// let note = StudyNote::new("암호학 기초", Category::General, "AES, RSA");
/// let repo = MockStudyRepository::builder().with_note(note.clone()).build();
///
/// assert_eq!(repo.get_note(&note.note_id).unwrap(), Some(note));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockStudyRepository {
    notes: Vec<StudyNote>,
    quizzes: Vec<QuizQuestion>,
    fail_writes: bool,
    writes: usize,
}

impl MockStudyRepository {
    pub fn builder() -> MockStudyRepositoryBuilder {
        MockStudyRepositoryBuilder::new()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn check_write(&mut self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::StorageError("simulated write failure".to_string()));
        }
        self.writes += 1;
        Ok(())
    }
}

impl NoteRepository for MockStudyRepository {
    fn save_note(&mut self, note: &StudyNote) -> Result<(), DomainError> {
        self.check_write()?;
        match self.notes.iter_mut().find(|n| n.note_id == note.note_id) {
            Some(existing) => *existing = note.clone(),
            None => self.notes.push(note.clone()),
        }
        Ok(())
    }

    fn all_notes(&self) -> Result<Vec<StudyNote>, DomainError> {
        Ok(self.notes.clone())
    }

    fn delete_note(&mut self, id: &str) -> Result<bool, DomainError> {
        let Some(index) = self.notes.iter().position(|n| n.note_id == id) else {
            return Ok(false);
        };
        self.check_write()?;
        self.notes.remove(index);
        Ok(true)
    }

    fn replace_notes(&mut self, notes: &[StudyNote]) -> Result<(), DomainError> {
        self.check_write()?;
        self.notes = notes.to_vec();
        Ok(())
    }
}

impl QuizRepository for MockStudyRepository {
    fn save_quiz(&mut self, quiz: &QuizQuestion) -> Result<(), DomainError> {
        self.check_write()?;
        match self.quizzes.iter_mut().find(|q| q.question_id == quiz.question_id) {
            Some(existing) => *existing = quiz.clone(),
            None => self.quizzes.push(quiz.clone()),
        }
        Ok(())
    }

    fn all_quizzes(&self) -> Result<Vec<QuizQuestion>, DomainError> {
        Ok(self.quizzes.clone())
    }

    fn replace_quizzes(&mut self, quizzes: &[QuizQuestion]) -> Result<(), DomainError> {
        self.check_write()?;
        self.quizzes = quizzes.to_vec();
        Ok(())
    }
}

/// Builder for MockStudyRepository
///
/// Provides a fluent interface for configuring mock contents.
pub struct MockStudyRepositoryBuilder {
    notes: Vec<StudyNote>,
    quizzes: Vec<QuizQuestion>,
    fail_writes: bool,
}

impl MockStudyRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            quizzes: vec![],
            fail_writes: false,
        }
    }

    pub fn with_note(mut self, note: StudyNote) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_notes(mut self, notes: impl IntoIterator<Item = StudyNote>) -> Self {
        self.notes.extend(notes);
        self
    }

    pub fn with_quiz(mut self, quiz: QuizQuestion) -> Self {
        self.quizzes.push(quiz);
        self
    }

    pub fn with_quizzes(mut self, quizzes: impl IntoIterator<Item = QuizQuestion>) -> Self {
        self.quizzes.extend(quizzes);
        self
    }

    /// Make every write fail with a storage error
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn build(self) -> MockStudyRepository {
        MockStudyRepository {
            notes: self.notes,
            quizzes: self.quizzes,
            fail_writes: self.fail_writes,
            writes: 0,
        }
    }
}

impl Default for MockStudyRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
