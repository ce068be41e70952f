// src/domain/note.rs
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_IMPORTANCE, MAX_IMPORTANCE, MIN_IMPORTANCE};
use crate::domain::{new_short_id, Category};

/// How important a note is for the exam, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Importance(u8);

impl Importance {
    pub fn new(value: i64) -> Self {
        Self(value.clamp(MIN_IMPORTANCE as i64, MAX_IMPORTANCE as i64) as u8)
    }

    /// Lenient parse for user input: non-numeric text yields the default.
    pub fn parse_or_default(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn stars(self) -> String {
        "*".repeat(self.0 as usize)
    }
}

impl Default for Importance {
    fn default() -> Self {
        Self(DEFAULT_IMPORTANCE)
    }
}

impl From<i64> for Importance {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Importance> for u8 {
    fn from(value: Importance) -> Self {
        value.0
    }
}

/// A study note tied to an exam subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyNote {
    pub note_id: String,
    pub title: String,
    pub category: Category,
    #[serde(default)]
    pub subcategory: String,
    pub content: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub importance: Importance,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub mastered: bool,
    #[serde(with = "timestamp", default = "now")]
    pub created_at: NaiveDateTime,
    #[serde(with = "timestamp", default = "now")]
    pub updated_at: NaiveDateTime,
}

impl StudyNote {
    /// New note with a fresh id, importance 3, no keywords and no subcategory.
    pub fn new(title: impl Into<String>, category: Category, content: impl Into<String>) -> Self {
        let created = now();
        Self {
            note_id: new_short_id(),
            title: title.into(),
            category,
            subcategory: String::new(),
            content: content.into(),
            keywords: Vec::new(),
            importance: Importance::default(),
            review_count: 0,
            mastered: false,
            created_at: created,
            updated_at: created,
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }

    /// Refresh `updated_at`. Every mutation goes through here.
    pub fn touch(&mut self) {
        self.updated_at = now();
    }

    pub fn record_review(&mut self) {
        self.review_count += 1;
        self.touch();
    }

    pub fn toggle_mastered(&mut self) {
        self.mastered = !self.mastered;
        self.touch();
    }

    /// Case-insensitive substring match on title, content or any keyword.
    pub fn matches(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self
                .keywords
                .iter()
                .any(|kw| kw.to_lowercase().contains(&needle))
    }
}

/// Split a comma separated keyword list, dropping blanks.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}

fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::constants::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
            .or_else(|_| raw.parse::<NaiveDateTime>())
            .map_err(serde::de::Error::custom)
    }
}
