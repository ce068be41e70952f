// src/application/exam_simulator.rs
//
// Simulated exam taken by a scripted solver. Each answer is a Bernoulli
// trial with a per-category probability. The result is a simulation only:
// it never reads or updates the recorded attempt counters.
use chrono::{Local, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::UNKNOWN_ANSWER;
use crate::domain::{percentage, Category, DomainError, ExamVerdict, QuizQuestion};

/// Who sits the simulated exam and how likely they are to be right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverProfile {
    pub name: String,
    pub version: String,
    pub base_accuracy: f64,
    pub strength_accuracy: f64,
    pub weakness_accuracy: f64,
    pub strengths: Vec<Category>,
    pub weaknesses: Vec<Category>,
}

impl Default for SolverProfile {
    fn default() -> Self {
        Self {
            name: "CISE_Alpha_Bot".to_string(),
            version: "v2.0".to_string(),
            base_accuracy: 0.75,
            strength_accuracy: 0.95,
            weakness_accuracy: 0.50,
            strengths: vec![Category::Network, Category::Application],
            weaknesses: vec![Category::ManagementAndLaw],
        }
    }
}

impl SolverProfile {
    /// Probability of a correct answer in `category`, within `0.0..=1.0`.
    ///
    /// A NaN accuracy falls back to `base_accuracy`, and to `0.0` when that is NaN too.
    pub fn pass_probability(&self, category: Category) -> f64 {
        let p = if self.strengths.contains(&category) {
            self.strength_accuracy
        } else if self.weaknesses.contains(&category) {
            self.weakness_accuracy
        } else {
            self.base_accuracy
        };
        let p = if p.is_nan() { self.base_accuracy } else { p };
        if p.is_nan() {
            return 0.0;
        }
        p.clamp(0.0, 1.0)
    }

    /// Every accuracy must be a finite number.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("base_accuracy", self.base_accuracy),
            ("strength_accuracy", self.strength_accuracy),
            ("weakness_accuracy", self.weakness_accuracy),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(DomainError::InvalidProfile(format!(
                "{name} must be a finite number, got {value}"
            ))),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedAnswer {
    pub question: String,
    pub category: Category,
    pub solver_answer: String,
    pub correct_answer: String,
    pub correct: bool,
    pub reasoning: String,
}

/// Per-category tally of a simulated exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryResult {
    pub category: Category,
    pub total: usize,
    pub correct: usize,
}

impl CategoryResult {
    pub fn rate(&self) -> f64 {
        percentage(self.correct as u64, self.total as u64)
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedExam {
    pub profile: SolverProfile,
    pub taken_at: NaiveDateTime,
    pub answers: Vec<SimulatedAnswer>,
}

impl SimulatedExam {
    pub fn total(&self) -> usize {
        self.answers.len()
    }

    pub fn correct(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    /// Percentage of correct answers, `0.0` for an empty exam.
    pub fn score(&self) -> f64 {
        percentage(self.correct() as u64, self.total() as u64)
    }

    pub fn verdict(&self) -> ExamVerdict {
        ExamVerdict::from_score(self.score())
    }

    /// Tallies in the order categories first appear in the exam.
    pub fn category_results(&self) -> Vec<CategoryResult> {
        let mut results: Vec<CategoryResult> = Vec::new();
        for answer in &self.answers {
            let index = match results.iter().position(|r| r.category == answer.category) {
                Some(index) => index,
                None => {
                    results.push(CategoryResult {
                        category: answer.category,
                        total: 0,
                        correct: 0,
                    });
                    results.len() - 1
                }
            };
            results[index].total += 1;
            if answer.correct {
                results[index].correct += 1;
            }
        }
        results
    }

    pub fn wrong_answers(&self) -> impl Iterator<Item = &SimulatedAnswer> {
        self.answers.iter().filter(|a| !a.correct)
    }
}

pub struct ExamSimulator {
    profile: SolverProfile,
}

impl ExamSimulator {
    pub fn new(profile: SolverProfile) -> Self {
        Self { profile }
    }

    /// Sit an exam of up to `size` questions sampled from `bank`.
    pub fn sit_exam<G: Rng + ?Sized>(
        &self,
        bank: &[QuizQuestion],
        size: usize,
        rng: &mut G,
    ) -> SimulatedExam {
        let size = size.min(bank.len());
        let answers: Vec<SimulatedAnswer> = bank
            .choose_multiple(rng, size)
            .map(|question| self.solve(question, rng))
            .collect();

        let exam = SimulatedExam {
            profile: self.profile.clone(),
            taken_at: Local::now().naive_local(),
            answers,
        };
        info!(
            solver = %self.profile.name,
            total = exam.total(),
            score = exam.score(),
            "Simulated exam finished"
        );
        exam
    }

    fn solve<G: Rng + ?Sized>(&self, question: &QuizQuestion, rng: &mut G) -> SimulatedAnswer {
        let category = question.category;
        let correct = rng.gen_bool(self.profile.pass_probability(category));
        let correct_answer = question.answer().to_string();

        let (solver_answer, reasoning) = if correct {
            (
                correct_answer.clone(),
                format!("[AI 분석] '{}' 분야 지식에 기반하여 정답을 확신합니다.", category),
            )
        } else {
            let wrong: Vec<&String> = question
                .choices()
                .iter()
                .filter(|c| **c != correct_answer)
                .collect();
            let picked = wrong
                .choose(rng)
                .map(|c| c.to_string())
                .unwrap_or_else(|| UNKNOWN_ANSWER.to_string());
            (
                picked,
                format!("[AI 혼란] 이 문제는 '{}' 분야의 심화 내용이라 헷갈립니다.", category),
            )
        };
        debug!(question_id = %question.question_id, correct, "Simulated answer");

        SimulatedAnswer {
            question: question.question.clone(),
            category,
            solver_answer,
            correct_answer,
            correct,
            reasoning,
        }
    }
}
