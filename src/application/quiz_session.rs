// src/application/quiz_session.rs
//
// Quiz flow: Selecting (scope + sample size) -> Asking (one question at a
// time, each answer persisted immediately) -> Summarizing. An empty pool ends
// in NoQuestions without asking anything.
use crate::application::QuizRepository;
use crate::domain::{percentage, Category, DomainError, QuestionKind, QuizQuestion, SessionTier};
use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Which part of the bank a session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(Category),
}

/// Source of answers for a running session (a terminal, a script, ...).
pub trait Respondent {
    /// Return the raw response to `question`, asked as number `position` of `total`.
    fn respond(&mut self, position: usize, total: usize, question: &QuizQuestion) -> Result<String>;

    /// Called after each graded answer.
    fn acknowledge(&mut self, _outcome: &AnswerOutcome) {}
}

/// Result of grading one response.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub question_id: String,
    /// The response as compared, i.e. a choice number resolved to its text.
    pub response: String,
    pub expected: String,
    pub correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub correct: u32,
    pub wrong: u32,
}

impl SessionSummary {
    pub fn total(&self) -> u32 {
        self.correct + self.wrong
    }

    pub fn accuracy(&self) -> f64 {
        percentage(self.correct as u64, self.total() as u64)
    }

    pub fn tier(&self) -> SessionTier {
        SessionTier::from_accuracy(self.accuracy())
    }
}

pub enum SessionStart<R: QuizRepository> {
    /// The selected pool is empty.
    NoQuestions,
    Ready(QuizSession<R>),
}

pub struct QuizSession<R: QuizRepository> {
    repository: R,
    questions: Vec<QuizQuestion>,
    cursor: usize,
    summary: SessionSummary,
}

impl<R: QuizRepository> QuizSession<R> {
    /// Draw a random, non-repeating sample from the pool selected by `scope`.
    ///
    /// `requested` is clamped to the pool size; `None` takes the whole pool.
    #[instrument(level = "debug", skip(repository, rng))]
    pub fn start<G: Rng + ?Sized>(
        repository: R,
        scope: QuizScope,
        requested: Option<usize>,
        rng: &mut G,
    ) -> Result<SessionStart<R>, DomainError> {
        let pool = match scope {
            QuizScope::All => repository.all_quizzes()?,
            QuizScope::Category(category) => repository.quizzes_by_category(category)?,
        };
        if pool.is_empty() {
            info!(?scope, "No questions available");
            return Ok(SessionStart::NoQuestions);
        }

        let count = requested.unwrap_or(pool.len()).min(pool.len());
        let questions: Vec<QuizQuestion> = pool.choose_multiple(rng, count).cloned().collect();
        debug!(pool = pool.len(), count, "Selected questions");

        Ok(SessionStart::Ready(Self {
            repository,
            questions,
            cursor: 0,
            summary: SessionSummary::default(),
        }))
    }

    /// Number of questions in this session.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question awaiting an answer, `None` once all are answered.
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.cursor)
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    /// Grade `response` for the current question, bump its counter and save it.
    ///
    /// Returns `None` when the session is already finished. A failed save
    /// leaves the question and the tally untouched.
    pub fn submit(&mut self, response: &str) -> Result<Option<AnswerOutcome>, DomainError> {
        let Some(current) = self.questions.get(self.cursor) else {
            return Ok(None);
        };

        let (resolved, correct) = grade(current, response);
        let mut updated = current.clone();
        updated.record_attempt(correct);
        self.repository.save_quiz(&updated)?;
        self.questions[self.cursor] = updated;
        let question = &self.questions[self.cursor];

        if correct {
            self.summary.correct += 1;
        } else {
            self.summary.wrong += 1;
        }
        self.cursor += 1;

        debug!(question_id = %question.question_id, correct, "Graded answer");
        Ok(Some(AnswerOutcome {
            question_id: question.question_id.clone(),
            response: resolved,
            expected: question.answer().to_string(),
            correct,
            explanation: question.explanation.clone(),
        }))
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Ask every remaining question through `respondent` and summarize.
    pub fn run<P: Respondent + ?Sized>(&mut self, respondent: &mut P) -> Result<SessionSummary> {
        let total = self.questions.len();
        while let Some(question) = self.current() {
            let response = respondent.respond(self.cursor + 1, total, question)?;
            if let Some(outcome) = self.submit(&response)? {
                respondent.acknowledge(&outcome);
            }
        }
        let summary = self.summary();
        info!(
            correct = summary.correct,
            wrong = summary.wrong,
            accuracy = summary.accuracy(),
            "Quiz session finished"
        );
        Ok(summary)
    }

    pub fn into_repository(self) -> R {
        self.repository
    }
}

/// Resolve a response against a question and decide correctness.
///
/// A multiple choice response that is a valid 1-based number becomes the
/// text of that choice; anything else is compared as typed.
pub fn grade(question: &QuizQuestion, response: &str) -> (String, bool) {
    let response = response.trim();
    match &question.kind {
        QuestionKind::MultipleChoice {
            choices,
            answer_index,
        } => {
            let resolved = response
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| choices.get(i))
                .cloned()
                .unwrap_or_else(|| response.to_string());
            let correct = resolved == choices[*answer_index];
            (resolved, correct)
        }
        QuestionKind::FreeText { answer } => {
            let correct = response.to_lowercase() == answer.trim().to_lowercase();
            (response.to_string(), correct)
        }
    }
}
