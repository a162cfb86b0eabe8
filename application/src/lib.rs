//! Application layer for leetbud
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MAX_HISTORY, SessionConfig};
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    problem_catalog::{CatalogError, ProblemCatalog},
};
pub use use_cases::conversation::{ConversationError, ConversationSession};
pub use use_cases::resolve_problem::{Resolution, ResolveError, ResolveProblemUseCase};
