// src/domain/mod.rs
pub mod category;
pub mod error;
pub mod grading;
pub mod note;
pub mod quiz;
pub mod stats;

pub use category::Category;
pub use error::DomainError;
pub use grading::{CategoryBand, ExamVerdict, SessionTier};
pub use note::{Importance, StudyNote};
pub use quiz::{QuestionKind, QuizQuestion};
pub use stats::{CategoryStats, QuizStats, StudyStats};

/// Short random identifier used for notes and questions.
pub fn new_short_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Percentage of `part` in `whole`, `0.0` when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
