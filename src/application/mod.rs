// src/application/mod.rs
pub mod exam_simulator;
pub mod note_deleter;
pub mod note_editor;
pub mod note_lister;
pub mod note_viewer;
pub mod quiz_bank;
pub mod quiz_session;
pub mod repository;
pub mod seeder;

pub use exam_simulator::{ExamSimulator, SimulatedExam, SolverProfile};
pub use note_deleter::NoteDeleter;
pub use note_editor::{NoteChanges, NoteDraft, NoteEditor};
pub use note_lister::NoteLister;
pub use note_viewer::NoteViewer;
pub use quiz_bank::{QuestionDraft, QuizBank};
pub use quiz_session::{
    AnswerOutcome, QuizScope, QuizSession, Respondent, SessionStart, SessionSummary,
};
pub use repository::{NoteRepository, QuizRepository, StudyRepository};
pub use seeder::Seeder;
