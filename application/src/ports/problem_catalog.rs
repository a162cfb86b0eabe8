//! Problem catalog port
//!
//! Defines the interface for looking up practice problems in a remote catalog.

use async_trait::async_trait;
use leetbud_domain::{CatalogEntry, ProblemDetail};
use thiserror::Error;

/// Errors that can occur while talking to the problem catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog could not be reached, or answered with a failing status
    #[error("Network error: {0}")]
    Network(String),

    /// The catalog answered with an explicit error payload
    #[error("Catalog error: {0}")]
    Service(String),

    /// The response arrived but did not have the expected shape
    #[error("Invalid catalog data: {0}")]
    InvalidData(String),
}

/// Remote catalog of practice problems
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ProblemCatalog: Send + Sync {
    /// Bulk listing to search through.
    ///
    /// The result is an unordered bag of raw entries; the caller does the
    /// matching and ranking, so an adapter may return the whole catalog.
    async fn search(&self, query: &str) -> Result<Vec<CatalogEntry>, CatalogError>;

    /// Full detail for one problem, or `None` when the slug is unknown.
    async fn fetch_detail(&self, slug: &str) -> Result<Option<ProblemDetail>, CatalogError>;
}
