// src/domain/grading.rs
//
// Score classifications. All cut points are inclusive lower bounds and are
// compared on the unrounded percentage.
use crate::constants::{EXCELLENT_RATE, GOOD_ACCURACY, PASS_SCORE};

/// Feedback tier for a finished quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTier {
    Perfect,
    Good,
    NearPassing,
    NeedsReview,
}

impl SessionTier {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy == 100.0 {
            SessionTier::Perfect
        } else if accuracy >= GOOD_ACCURACY {
            SessionTier::Good
        } else if accuracy >= PASS_SCORE {
            SessionTier::NearPassing
        } else {
            SessionTier::NeedsReview
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SessionTier::Perfect => "완벽합니다!",
            SessionTier::Good => "잘하고 있습니다! 조금만 더 복습하세요.",
            SessionTier::NearPassing => "합격 수준에 가까워지고 있습니다. 꾸준히 복습하세요.",
            SessionTier::NeedsReview => "더 많은 복습이 필요합니다. 노트를 다시 확인해보세요.",
        }
    }
}

/// Pass/fail verdict of an exam score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamVerdict {
    Pass,
    Fail,
}

impl ExamVerdict {
    pub fn from_score(score: f64) -> Self {
        if score >= PASS_SCORE {
            ExamVerdict::Pass
        } else {
            ExamVerdict::Fail
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExamVerdict::Pass => "합격 (PASS)",
            ExamVerdict::Fail => "불합격 (FAIL)",
        }
    }
}

/// Per-category achievement band in an exam report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryBand {
    Excellent,
    Nominal,
    AtRisk,
}

impl CategoryBand {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= EXCELLENT_RATE {
            CategoryBand::Excellent
        } else if rate < PASS_SCORE {
            CategoryBand::AtRisk
        } else {
            CategoryBand::Nominal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryBand::Excellent => "우수",
            CategoryBand::Nominal => "보통",
            CategoryBand::AtRisk => "위험",
        }
    }
}
