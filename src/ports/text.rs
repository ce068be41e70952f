// src/ports/text.rs
use crate::application::{AnswerOutcome, SessionSummary};
use crate::domain::{Category, QuizQuestion, StudyNote, StudyStats};
use std::fmt::Write;
use strum::IntoEnumIterator;

const RULE_WIDTH: usize = 60;

/// Plain-text rendering for the terminal.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn header(&self, title: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        format!("{rule}\n  {title}\n{rule}")
    }

    fn separator(&self) -> String {
        "-".repeat(RULE_WIDTH)
    }

    /// One-line summary used in listings.
    pub fn note_summary(&self, note: &StudyNote) -> String {
        let status = if note.mastered { "[완료]" } else { "[학습중]" };
        format!(
            "[{}] {} {} | {} > {} | 중요도: {} | 복습: {}회",
            note.note_id,
            status,
            note.title,
            note.category,
            note.subcategory,
            note.importance.stars(),
            note.review_count
        )
    }

    pub fn note_detail(&self, note: &StudyNote) -> String {
        let keywords = if note.keywords.is_empty() {
            "없음".to_string()
        } else {
            note.keywords.join(", ")
        };
        let status = if note.mastered { "완료" } else { "학습중" };
        let sep = self.separator();

        let mut out = String::new();
        let _ = writeln!(out, "{sep}");
        let _ = writeln!(out, "  제목: {}", note.title);
        let _ = writeln!(out, "  과목: {} > {}", note.category, note.subcategory);
        let _ = writeln!(
            out,
            "  중요도: {} ({}/5)",
            note.importance.stars(),
            note.importance.value()
        );
        let _ = writeln!(out, "  키워드: {keywords}");
        let _ = writeln!(out, "  상태: {status}");
        let _ = writeln!(out, "  복습 횟수: {}회", note.review_count);
        let _ = writeln!(out, "  생성일: {}", note.created_at.format(crate::constants::TIMESTAMP_FORMAT));
        let _ = writeln!(out, "  수정일: {}", note.updated_at.format(crate::constants::TIMESTAMP_FORMAT));
        let _ = writeln!(out, "{sep}");
        let _ = writeln!(out, "\n{}\n", note.content);
        let _ = write!(out, "{sep}");
        out
    }

    /// Listing grouped under category headings.
    pub fn note_groups(&self, groups: &[(Category, Vec<StudyNote>)]) -> String {
        let mut out = String::new();
        let mut total = 0;
        for (category, notes) in groups {
            let _ = writeln!(out, "\n  [{}] ({}개)", category, notes.len());
            for note in notes {
                let _ = writeln!(out, "    {}", self.note_summary(note));
            }
            total += notes.len();
        }
        let _ = write!(out, "\n  총 {total}개의 노트");
        out
    }

    pub fn stats(&self, stats: &StudyStats) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "  전체 노트: {}개", stats.total_notes);
        let _ = writeln!(out, "  학습 완료: {}개", stats.mastered_notes);
        if stats.total_notes > 0 {
            let _ = writeln!(out, "  완료율: {:.1}%", stats.mastered_rate());
        }

        let _ = writeln!(out, "\n  등록된 퀴즈: {}개", stats.total_quizzes);
        let qs = &stats.quiz_stats;
        if qs.total > 0 {
            let _ = writeln!(
                out,
                "  퀴즈 정답률: {:.1}% ({}/{})",
                qs.accuracy(),
                qs.correct,
                qs.total
            );
        }

        if !stats.category_stats.is_empty() {
            let _ = writeln!(out, "\n  과목별 현황:");
            let _ = writeln!(out, "{}", self.separator());
            for (category, cs) in &stats.category_stats {
                let _ = writeln!(
                    out,
                    "  {}: {}개 | 완료: {}개 ({:.0}%) | 총 복습: {}회",
                    category,
                    cs.total,
                    cs.mastered,
                    cs.mastered_rate(),
                    cs.review_total
                );
            }
        }
        out.trim_end().to_string()
    }

    pub fn category_structure(&self) -> String {
        let mut out = String::new();
        for category in Category::iter() {
            let _ = writeln!(out, "\n  [{}] {}", category.key(), category);
            for sub in category.subcategories() {
                let _ = writeln!(out, "      - {sub}");
            }
        }
        out.trim_end().to_string()
    }

    /// Question block shown before asking for a response.
    pub fn question(&self, position: usize, total: usize, question: &QuizQuestion) -> String {
        let mut out = format!(
            "\n  --- 문제 {}/{} [{}] ---\n\n  Q. {}\n",
            position, total, question.category, question.question
        );
        for (i, choice) in question.choices().iter().enumerate() {
            let _ = write!(out, "\n    {}. {}", i + 1, choice);
        }
        out
    }

    pub fn outcome(&self, outcome: &AnswerOutcome) -> String {
        let mut out = if outcome.correct {
            "\n  [O] 정답입니다!".to_string()
        } else {
            format!("\n  [X] 오답입니다. 정답: {}", outcome.expected)
        };
        if !outcome.explanation.is_empty() {
            let _ = write!(out, "\n  해설: {}", outcome.explanation);
        }
        out
    }

    pub fn session_summary(&self, summary: &SessionSummary) -> String {
        format!(
            "{}\n\n  총 문제: {}\n  정답: {}개\n  오답: {}개\n  정답률: {:.1}%\n\n  {}",
            self.header("퀴즈 결과"),
            summary.total(),
            summary.correct,
            summary.wrong,
            summary.accuracy(),
            summary.tier().message()
        )
    }
}
