// src/domain/category.rs
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};

use crate::domain::DomainError;

/// Exam subjects of the information security engineer exam.
///
/// Persisted by Korean label. On the command line a category may also be
/// given by its menu key (`1`..`5`) or its ASCII slug.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
pub enum Category {
    #[serde(rename = "시스템 보안")]
    #[strum(to_string = "시스템 보안", serialize = "system")]
    System,
    #[serde(rename = "네트워크 보안")]
    #[strum(to_string = "네트워크 보안", serialize = "network")]
    Network,
    #[serde(rename = "어플리케이션 보안")]
    #[strum(to_string = "어플리케이션 보안", serialize = "application")]
    Application,
    #[serde(rename = "정보보안 일반")]
    #[strum(to_string = "정보보안 일반", serialize = "general")]
    General,
    #[serde(rename = "정보보안 관리 및 법규")]
    #[strum(to_string = "정보보안 관리 및 법규", serialize = "law")]
    ManagementAndLaw,
}

impl Category {
    /// Menu key shown next to the category (1-based).
    pub fn key(self) -> usize {
        Category::iter()
            .position(|c| c == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    pub fn from_key(key: usize) -> Option<Self> {
        key.checked_sub(1).and_then(|i| Category::iter().nth(i))
    }

    /// Suggested sub-topics for this subject.
    pub fn subcategories(self) -> &'static [&'static str] {
        match self {
            Category::System => &[
                "운영체제 보안",
                "클라이언트 보안",
                "서버 보안",
                "리눅스/유닉스 보안",
                "윈도우 보안",
                "악성코드 분석",
            ],
            Category::Network => &[
                "네트워크 기초",
                "네트워크 공격/방어",
                "방화벽",
                "IDS/IPS",
                "VPN",
                "무선 네트워크 보안",
                "프로토콜 보안",
            ],
            Category::Application => &[
                "웹 보안",
                "데이터베이스 보안",
                "전자상거래 보안",
                "소프트웨어 개발 보안",
                "OWASP Top 10",
            ],
            Category::General => &[
                "암호학",
                "접근통제",
                "인증 기술",
                "보안 모델",
                "해시 함수",
                "공개키 기반구조(PKI)",
            ],
            Category::ManagementAndLaw => &[
                "정보보호 관리체계(ISMS)",
                "개인정보보호법",
                "정보통신망법",
                "전자서명법",
                "위험관리",
                "BCP/DRP",
            ],
        }
    }

    /// Parse a menu key, slug or label.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if let Ok(key) = trimmed.parse::<usize>() {
            return Category::from_key(key)
                .ok_or_else(|| DomainError::UnknownCategory(trimmed.to_string()));
        }
        trimmed
            .to_lowercase()
            .parse::<Category>()
            .or_else(|_| trimmed.parse::<Category>())
            .map_err(|_| DomainError::UnknownCategory(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_all_categories_when_iterating_then_five_subjects_with_subtopics() {
        let all: Vec<Category> = Category::iter().collect();

        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|c| !c.subcategories().is_empty()));
    }

    #[test]
    fn given_menu_key_when_parsing_then_resolves_category() {
        assert_eq!(Category::parse("1").unwrap(), Category::System);
        assert_eq!(Category::parse("5").unwrap(), Category::ManagementAndLaw);
        assert!(Category::parse("0").is_err());
        assert!(Category::parse("6").is_err());
    }

    #[test]
    fn given_slug_or_label_when_parsing_then_resolves_category() {
        assert_eq!(Category::parse("network").unwrap(), Category::Network);
        assert_eq!(Category::parse("Network").unwrap(), Category::Network);
        assert_eq!(Category::parse("정보보안 일반").unwrap(), Category::General);
        assert!(Category::parse("cooking").is_err());
    }

    #[test]
    fn given_category_when_displaying_then_uses_korean_label() {
        assert_eq!(Category::Application.to_string(), "어플리케이션 보안");
        assert_eq!(Category::Application.key(), 3);
    }

    #[test]
    fn given_category_when_serializing_then_writes_label() {
        let json = serde_json::to_string(&Category::System).unwrap();
        assert_eq!(json, "\"시스템 보안\"");

        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::System);
    }
}
