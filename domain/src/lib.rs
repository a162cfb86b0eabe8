//! Domain layer for leetbud
//!
//! This crate contains the core value objects and rules. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Problems
//!
//! - **ProblemRecord**: a validated practice problem, produced once per query
//! - **Candidate**: a search hit, ranked by exact-match first, then lowest id
//!
//! ## Conversations
//!
//! - **Message**: one `{role, content}` unit; order is the only index
//! - **trim_history**: keeps the pinned instruction plus the most recent messages

pub mod config;
pub mod core;
pub mod problem;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use self::core::{error::DomainError, model::Model};
pub use problem::{
    entities::{Candidate, CatalogEntry, Difficulty, ProblemDetail, ProblemRecord},
    markup::strip_markup,
    query::{is_numeric_id, to_slug},
    ranking::{entry_matches, rank_candidates, tie_break_rank},
};
pub use prompt::TutorPrompt;
pub use session::{
    entities::{Message, Role},
    history::trim_history,
};
