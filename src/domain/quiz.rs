// src/domain/quiz.rs
use serde::{Deserialize, Serialize};

use crate::domain::{new_short_id, percentage, Category, DomainError};

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Respondent picks one of `choices`; `answer_index` is the correct one.
    MultipleChoice {
        choices: Vec<String>,
        answer_index: usize,
    },
    /// Respondent types the answer; compared case-insensitively.
    FreeText { answer: String },
}

/// A gradable question with its attempt counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuizRecord", into = "QuizRecord")]
pub struct QuizQuestion {
    pub question_id: String,
    pub question: String,
    pub category: Category,
    pub kind: QuestionKind,
    pub explanation: String,
    pub correct_count: u32,
    pub wrong_count: u32,
}

impl QuizQuestion {
    pub fn multiple_choice(
        question: impl Into<String>,
        category: Category,
        choices: Vec<String>,
        answer_index: usize,
    ) -> Result<Self, DomainError> {
        let question = question.into();
        if answer_index >= choices.len() {
            return Err(DomainError::InvalidQuestion(format!(
                "answer index {} out of range for {} choices in '{}'",
                answer_index + 1,
                choices.len(),
                question
            )));
        }
        Ok(Self::with_kind(
            question,
            category,
            QuestionKind::MultipleChoice {
                choices,
                answer_index,
            },
        ))
    }

    pub fn free_text(question: impl Into<String>, category: Category, answer: impl Into<String>) -> Self {
        Self::with_kind(
            question.into(),
            category,
            QuestionKind::FreeText {
                answer: answer.into(),
            },
        )
    }

    fn with_kind(question: String, category: Category, kind: QuestionKind) -> Self {
        Self {
            question_id: new_short_id(),
            question,
            category,
            kind,
            explanation: String::new(),
            correct_count: 0,
            wrong_count: 0,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Text of the correct response.
    pub fn answer(&self) -> &str {
        match &self.kind {
            QuestionKind::MultipleChoice {
                choices,
                answer_index,
            } => &choices[*answer_index],
            QuestionKind::FreeText { answer } => answer,
        }
    }

    /// Choices in display order, empty for free-text questions.
    pub fn choices(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { choices, .. } => choices,
            QuestionKind::FreeText { .. } => &[],
        }
    }

    pub fn attempts(&self) -> u32 {
        self.correct_count + self.wrong_count
    }

    /// Share of correct attempts in percent, `0.0` before the first attempt.
    pub fn accuracy(&self) -> f64 {
        percentage(self.correct_count as u64, self.attempts() as u64)
    }

    pub fn record_attempt(&mut self, correct: bool) {
        if correct {
            self.correct_count += 1;
        } else {
            self.wrong_count += 1;
        }
    }
}

/// Flat on-disk shape of a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuizRecord {
    question_id: String,
    question: String,
    answer: String,
    category: Category,
    #[serde(default)]
    choices: Vec<String>,
    #[serde(default)]
    explanation: String,
    #[serde(default)]
    correct_count: u32,
    #[serde(default)]
    wrong_count: u32,
}

impl TryFrom<QuizRecord> for QuizQuestion {
    type Error = DomainError;

    fn try_from(record: QuizRecord) -> Result<Self, Self::Error> {
        let kind = if record.choices.is_empty() {
            QuestionKind::FreeText {
                answer: record.answer,
            }
        } else {
            let answer_index = record
                .choices
                .iter()
                .position(|c| *c == record.answer)
                .ok_or_else(|| {
                    DomainError::InvalidQuestion(format!(
                        "answer '{}' of question {} is not one of its choices",
                        record.answer, record.question_id
                    ))
                })?;
            QuestionKind::MultipleChoice {
                choices: record.choices,
                answer_index,
            }
        };

        Ok(Self {
            question_id: record.question_id,
            question: record.question,
            category: record.category,
            kind,
            explanation: record.explanation,
            correct_count: record.correct_count,
            wrong_count: record.wrong_count,
        })
    }
}

impl From<QuizQuestion> for QuizRecord {
    fn from(quiz: QuizQuestion) -> Self {
        let answer = quiz.answer().to_string();
        let choices = match quiz.kind {
            QuestionKind::MultipleChoice { choices, .. } => choices,
            QuestionKind::FreeText { .. } => Vec::new(),
        };
        Self {
            question_id: quiz.question_id,
            question: quiz.question,
            answer,
            category: quiz.category,
            choices,
            explanation: quiz.explanation,
            correct_count: quiz.correct_count,
            wrong_count: quiz.wrong_count,
        }
    }
}
