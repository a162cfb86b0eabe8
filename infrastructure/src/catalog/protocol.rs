//! Wire types for the LeetCode catalog endpoints.
//!
//! Two endpoints are used:
//!
//! - **Bulk listing** (`GET /api/problems/all`): every problem with its
//!   frontend id, title, slug and 1-based difficulty level.
//! - **GraphQL** (`POST /graphql`): full detail for a single slug.
//!
//! Parsing is kept free of I/O so it can be exercised with fixtures.

use leetbud_application::CatalogError;
use leetbud_domain::{CatalogEntry, ProblemDetail};
use serde::{Deserialize, Serialize};

/// GraphQL query for a single problem's detail
pub const QUESTION_DETAIL_QUERY: &str = r#"
query getQuestionDetail($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    questionFrontendId
    title
    difficulty
    content
    exampleTestcases
    topicTags {
      name
    }
  }
}
"#;

// ==================== Bulk listing ====================

#[derive(Debug, Deserialize)]
struct ProblemList {
    #[serde(default)]
    stat_status_pairs: Vec<StatStatusPair>,
}

#[derive(Debug, Deserialize)]
struct StatStatusPair {
    stat: Stat,
    #[serde(default)]
    difficulty: DifficultyLevel,
}

#[derive(Debug, Deserialize)]
struct Stat {
    frontend_question_id: u32,
    #[serde(rename = "question__title")]
    title: String,
    #[serde(rename = "question__title_slug")]
    title_slug: String,
}

#[derive(Debug, Deserialize)]
struct DifficultyLevel {
    level: i64,
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        Self { level: 1 }
    }
}

/// Parse the bulk listing body into raw catalog entries.
///
/// A missing difficulty block counts as level 1; the level itself is
/// validated later, only for entries that match a search.
pub fn parse_problem_list(body: &[u8]) -> Result<Vec<CatalogEntry>, CatalogError> {
    let list: ProblemList = serde_json::from_slice(body)
        .map_err(|e| CatalogError::InvalidData(format!("problem list: {}", e)))?;

    Ok(list
        .stat_status_pairs
        .into_iter()
        .map(|pair| CatalogEntry {
            id: pair.stat.frontend_question_id,
            title: pair.stat.title,
            slug: pair.stat.title_slug,
            difficulty_level: pair.difficulty.level,
        })
        .collect())
}

// ==================== GraphQL detail ====================

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'static str,
    pub variables: QuestionVariables<'a>,
}

#[derive(Debug, Serialize)]
pub struct QuestionVariables<'a> {
    #[serde(rename = "titleSlug")]
    pub title_slug: &'a str,
}

impl<'a> GraphQlRequest<'a> {
    pub fn question_detail(slug: &'a str) -> Self {
        Self {
            query: QUESTION_DETAIL_QUERY,
            variables: QuestionVariables { title_slug: slug },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Question {
    /// Number shown on the site; the bulk listing's `frontend_question_id`
    question_frontend_id: String,
    title: String,
    difficulty: String,
    content: Option<String>,
    #[serde(default)]
    example_testcases: Option<String>,
    #[serde(default)]
    topic_tags: Vec<TopicTag>,
}

#[derive(Debug, Deserialize)]
struct TopicTag {
    name: String,
}

/// Parse a GraphQL detail response.
///
/// - `errors` present → [`CatalogError::Service`] with the first message
/// - `data.question` null or absent → `Ok(None)`
/// - question object missing required fields → [`CatalogError::InvalidData`]
pub fn parse_question_detail(body: &[u8]) -> Result<Option<ProblemDetail>, CatalogError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| CatalogError::InvalidData(format!("question detail: {}", e)))?;

    if let Some(errors) = value.get("errors").and_then(|e| e.as_array()) {
        if let Some(first) = errors.first() {
            let message = first
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown catalog error");
            return Err(CatalogError::Service(message.to_string()));
        }
    }

    let question = match value.get("data").and_then(|d| d.get("question")) {
        Some(q) if !q.is_null() => q.clone(),
        _ => return Ok(None),
    };

    let question: Question = serde_json::from_value(question)
        .map_err(|e| CatalogError::InvalidData(format!("question detail: {}", e)))?;

    Ok(Some(ProblemDetail {
        id: question.question_frontend_id,
        title: question.title,
        difficulty_label: question.difficulty,
        raw_content: question.content,
        example_test_cases: question.example_testcases.unwrap_or_default(),
        topics: question.topic_tags.into_iter().map(|t| t.name).collect(),
    }))
}
