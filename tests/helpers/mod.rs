use anyhow::{Context, Result};
use std::path::PathBuf;
use studybot::domain::{Category, QuizQuestion, StudyNote};
use studybot::infrastructure::JsonStore;
use strum::IntoEnumIterator;
use tempfile::TempDir;

/// Temporary data directory with a store over it
#[allow(dead_code)]
pub struct TestDataDir {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDataDir {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().to_path_buf();
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Fresh store instance; stores share state only through the files
    pub fn store(&self) -> JsonStore {
        JsonStore::new(&self.path)
    }

    pub fn read_notes_file(&self) -> Result<String> {
        std::fs::read_to_string(self.store().notes_path()).context("Failed to read notes.json")
    }
}

/// One multiple-choice question per category, answer is always choice 1
#[allow(dead_code)]
pub fn one_question_per_category() -> Vec<QuizQuestion> {
    Category::iter()
        .map(|category| {
            QuizQuestion::multiple_choice(
                format!("{category} 대표 문제"),
                category,
                vec!["정답".to_string(), "오답".to_string(), "모름".to_string()],
                0,
            )
            .expect("valid question")
        })
        .collect()
}

#[allow(dead_code)]
pub fn sample_notes() -> Vec<StudyNote> {
    vec![
        StudyNote::new("암호학 기초", Category::General, "대칭키와 공개키 암호")
            .with_keywords(["AES", "RSA"]),
        StudyNote::new("방화벽 정책", Category::Network, "허용 목록 기반 정책")
            .with_keywords(["firewall"]),
        StudyNote::new("SQL Injection", Category::Application, "입력값 검증 누락")
            .with_keywords(["OWASP", "웹"]),
    ]
}
