//! Problem domain entities

use super::markup::strip_markup;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Problem difficulty, always one of the three canonical labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Map a 1-based catalog level (1 = Easy, 2 = Medium, 3 = Hard).
    pub fn from_level(level: i64) -> Result<Self, DomainError> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            other => Err(DomainError::InvalidDifficultyLevel(other)),
        }
    }

    /// Normalize a catalog label regardless of casing ("EASY", "easy", "Easy").
    pub fn from_label(label: &str) -> Result<Self, DomainError> {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DomainError::InvalidDifficultyLabel(label.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw entry of the catalog's bulk listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u32,
    pub title: String,
    pub slug: String,
    /// 1-based difficulty level, not yet validated
    pub difficulty_level: i64,
}

/// Lightweight search hit used to rank and pick before fetching the full record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub difficulty: Difficulty,
}

impl Candidate {
    pub fn try_from_entry(entry: &CatalogEntry) -> Result<Self, DomainError> {
        Ok(Self {
            id: entry.id,
            title: entry.title.clone(),
            slug: entry.slug.clone(),
            difficulty: Difficulty::from_level(entry.difficulty_level)?,
        })
    }
}

/// Problem detail exactly as the catalog hands it over, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemDetail {
    pub id: String,
    pub title: String,
    pub difficulty_label: String,
    /// Marked-up description; `None` for problems whose content is withheld
    pub raw_content: Option<String>,
    pub example_test_cases: String,
    pub topics: Vec<String>,
}

/// A fully resolved practice problem (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    id: u32,
    title: String,
    difficulty: Difficulty,
    description: String,
    test_cases: String,
    topics: BTreeSet<String>,
}

impl ProblemRecord {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        difficulty: Difficulty,
        description: impl Into<String>,
        test_cases: impl Into<String>,
        topics: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            difficulty,
            description: description.into(),
            test_cases: test_cases.into(),
            topics: topics.into_iter().collect(),
        }
    }

    /// Validate a raw catalog detail: parse the id, normalize the
    /// difficulty label and strip the description markup.
    pub fn from_detail(detail: ProblemDetail) -> Result<Self, DomainError> {
        let id = detail
            .id
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::InvalidProblemId(detail.id.clone()))?;
        if detail.title.trim().is_empty() {
            return Err(DomainError::MissingField("title"));
        }
        let difficulty = Difficulty::from_label(&detail.difficulty_label)?;
        let description = detail
            .raw_content
            .as_deref()
            .map(strip_markup)
            .unwrap_or_default();

        Ok(Self::new(
            id,
            detail.title,
            difficulty,
            description,
            detail.example_test_cases,
            detail.topics,
        ))
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn test_cases(&self) -> &str {
        &self.test_cases
    }

    pub fn topics(&self) -> &BTreeSet<String> {
        &self.topics
    }

    /// One-line summary, e.g. `Problem 1: Two Sum (Easy)`
    pub fn headline(&self) -> String {
        format!("Problem {}: {} ({})", self.id, self.title, self.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> ProblemDetail {
        ProblemDetail {
            id: "1".to_string(),
            title: "Two Sum".to_string(),
            difficulty_label: "EASY".to_string(),
            raw_content: Some("<p>Given an array <code>nums</code>&hellip;</p>".to_string()),
            example_test_cases: "[2,7,11,15]\n9".to_string(),
            topics: vec![
                "Hash Table".to_string(),
                "Array".to_string(),
                "Array".to_string(),
            ],
        }
    }

    #[test]
    fn test_difficulty_from_level() {
        assert_eq!(Difficulty::from_level(1), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::from_level(2), Ok(Difficulty::Medium));
        assert_eq!(Difficulty::from_level(3), Ok(Difficulty::Hard));
    }

    #[test]
    fn test_difficulty_level_out_of_range() {
        assert_eq!(
            Difficulty::from_level(0),
            Err(DomainError::InvalidDifficultyLevel(0))
        );
        assert_eq!(
            Difficulty::from_level(4),
            Err(DomainError::InvalidDifficultyLevel(4))
        );
    }

    #[test]
    fn test_difficulty_label_case_insensitive() {
        assert_eq!(Difficulty::from_label("easy"), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::from_label("MEDIUM"), Ok(Difficulty::Medium));
        assert_eq!(Difficulty::from_label("Hard"), Ok(Difficulty::Hard));
        assert!(Difficulty::from_label("brutal").is_err());
    }

    #[test]
    fn test_candidate_rejects_bad_level() {
        let entry = CatalogEntry {
            id: 7,
            title: "Reverse Integer".to_string(),
            slug: "reverse-integer".to_string(),
            difficulty_level: 5,
        };
        assert_eq!(
            Candidate::try_from_entry(&entry),
            Err(DomainError::InvalidDifficultyLevel(5))
        );
    }

    #[test]
    fn test_record_from_detail() {
        let record = ProblemRecord::from_detail(detail()).unwrap();
        assert_eq!(record.id(), 1);
        assert_eq!(record.title(), "Two Sum");
        assert_eq!(record.difficulty(), Difficulty::Easy);
        assert_eq!(record.description(), "Given an array nums\u{2026}");
        assert_eq!(record.test_cases(), "[2,7,11,15]\n9");
        assert_eq!(record.topics().len(), 2);
        assert_eq!(record.headline(), "Problem 1: Two Sum (Easy)");
    }

    #[test]
    fn test_record_rejects_non_numeric_id() {
        let mut raw = detail();
        raw.id = "abc".to_string();
        assert_eq!(
            ProblemRecord::from_detail(raw),
            Err(DomainError::InvalidProblemId("abc".to_string()))
        );
    }

    #[test]
    fn test_record_rejects_negative_id() {
        let mut raw = detail();
        raw.id = "-3".to_string();
        assert!(matches!(
            ProblemRecord::from_detail(raw),
            Err(DomainError::InvalidProblemId(_))
        ));
    }

    #[test]
    fn test_record_without_content_has_empty_description() {
        let mut raw = detail();
        raw.raw_content = None;
        let record = ProblemRecord::from_detail(raw).unwrap();
        assert_eq!(record.description(), "");
    }
}
