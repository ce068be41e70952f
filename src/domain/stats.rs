// src/domain/stats.rs
use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{percentage, Category, QuizQuestion, StudyNote};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub total: u32,
    pub mastered: u32,
    pub review_total: u32,
}

impl CategoryStats {
    pub fn mastered_rate(&self) -> f64 {
        percentage(self.mastered as u64, self.total as u64)
    }
}

/// Attempt counters summed over every question in the bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuizStats {
    /// Total attempts, not number of questions.
    pub total: u64,
    pub correct: u64,
    pub wrong: u64,
}

impl QuizStats {
    pub fn accuracy(&self) -> f64 {
        percentage(self.correct, self.total)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StudyStats {
    pub total_notes: usize,
    pub mastered_notes: usize,
    pub total_quizzes: usize,
    pub category_stats: BTreeMap<Category, CategoryStats>,
    pub quiz_stats: QuizStats,
}

impl StudyStats {
    pub fn collect(notes: &[StudyNote], quizzes: &[QuizQuestion]) -> Self {
        let mut stats = StudyStats {
            total_notes: notes.len(),
            total_quizzes: quizzes.len(),
            ..Default::default()
        };

        for note in notes {
            let entry = stats.category_stats.entry(note.category).or_default();
            entry.total += 1;
            entry.review_total += note.review_count;
            if note.mastered {
                entry.mastered += 1;
                stats.mastered_notes += 1;
            }
        }

        for quiz in quizzes {
            stats.quiz_stats.total += quiz.attempts() as u64;
            stats.quiz_stats.correct += quiz.correct_count as u64;
            stats.quiz_stats.wrong += quiz.wrong_count as u64;
        }

        stats
    }

    pub fn mastered_rate(&self) -> f64 {
        percentage(self.mastered_notes as u64, self.total_notes as u64)
    }
}
