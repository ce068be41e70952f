// src/application/quiz_bank.rs
use crate::application::QuizRepository;
use crate::domain::{Category, DomainError, QuizQuestion};
use tracing::info;

/// Input for a new question.
///
/// With no `choices` the question is free text and `answer` is the expected
/// response. With choices, `answer` is either a 1-based choice number or the
/// exact text of one of the choices.
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    pub question: String,
    pub category: Category,
    pub choices: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

impl QuestionDraft {
    fn into_question(self) -> Result<QuizQuestion, DomainError> {
        let question = self.question.trim().to_string();
        if question.is_empty() {
            return Err(DomainError::InvalidQuestion("question must not be empty".into()));
        }
        let answer = self.answer.trim();
        let choices: Vec<String> = self
            .choices
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        let quiz = if choices.is_empty() {
            if answer.is_empty() {
                return Err(DomainError::InvalidQuestion("answer must not be empty".into()));
            }
            QuizQuestion::free_text(question, self.category, answer)
        } else {
            if choices.len() < 2 {
                return Err(DomainError::InvalidQuestion(
                    "a multiple choice question needs at least 2 choices".into(),
                ));
            }
            let answer_index = match answer.parse::<usize>() {
                Ok(number) if (1..=choices.len()).contains(&number) => number - 1,
                Ok(number) => {
                    return Err(DomainError::InvalidQuestion(format!(
                        "answer number {} is not between 1 and {}",
                        number,
                        choices.len()
                    )))
                }
                Err(_) => choices.iter().position(|c| c == answer).ok_or_else(|| {
                    DomainError::InvalidQuestion(format!("answer '{}' is not one of the choices", answer))
                })?,
            };
            QuizQuestion::multiple_choice(question, self.category, choices, answer_index)?
        };

        Ok(quiz.with_explanation(self.explanation.trim()))
    }
}

pub struct QuizBank<R: QuizRepository> {
    repository: R,
}

impl<R: QuizRepository> QuizBank<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn add_question(&mut self, draft: QuestionDraft) -> Result<QuizQuestion, DomainError> {
        let quiz = draft.into_question()?;
        self.repository.save_quiz(&quiz)?;
        info!(question_id = %quiz.question_id, "Saved new question");
        Ok(quiz)
    }
}
