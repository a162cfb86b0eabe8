//! Resolve Problem use case.
//!
//! Turns a free-form query (a numeric id, a title, or a fragment of either)
//! into exactly one [`ProblemRecord`], trying progressively looser strategies:
//!
//! 1. **Exact id**: an all-digit query is searched and the hit whose id reads
//!    exactly like the query is fetched.
//! 2. **Exact slug**: the query is slugified (`"Two Sum"` → `"two-sum"`) and
//!    fetched directly.
//! 3. **Fuzzy search**: the best-ranked search hit is fetched.
//!
//! Finding nothing is a normal [`Resolution::NotFound`], never an error.

use crate::ports::problem_catalog::{CatalogError, ProblemCatalog};
use leetbud_domain::{
    Candidate, DomainError, ProblemRecord, is_numeric_id, rank_candidates, to_slug,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while resolving a problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Invalid catalog data: {0}")]
    InvalidCatalogData(String),
}

impl From<CatalogError> for ResolveError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Network(msg) => ResolveError::Network(msg),
            CatalogError::Service(msg) => ResolveError::Catalog(msg),
            CatalogError::InvalidData(msg) => ResolveError::InvalidCatalogData(msg),
        }
    }
}

impl From<DomainError> for ResolveError {
    fn from(err: DomainError) -> Self {
        ResolveError::InvalidCatalogData(err.to_string())
    }
}

/// Outcome of a resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ProblemRecord),
    NotFound,
}

impl Resolution {
    pub fn into_record(self) -> Option<ProblemRecord> {
        match self {
            Resolution::Found(record) => Some(record),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Use case for resolving a query into a single problem record.
#[derive(Clone)]
pub struct ResolveProblemUseCase {
    catalog: Arc<dyn ProblemCatalog>,
}

impl ResolveProblemUseCase {
    pub fn new(catalog: Arc<dyn ProblemCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolve `query` to one problem.
    ///
    /// Surrounding whitespace is ignored and a blank query resolves to
    /// [`Resolution::NotFound`] without contacting the catalog.
    pub async fn resolve(&self, query: &str) -> Result<Resolution, ResolveError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Resolution::NotFound);
        }

        if is_numeric_id(query) {
            let candidates = self.search(query).await?;
            if let Some(hit) = candidates.iter().find(|c| c.id.to_string() == query) {
                debug!("Exact id match for {:?}: {}", query, hit.slug);
                return self.fetch(&hit.slug).await;
            }
        }

        let slug = to_slug(query);
        debug!("Trying direct slug {:?}", slug);
        if let Resolution::Found(record) = self.fetch(&slug).await? {
            return Ok(Resolution::Found(record));
        }

        let candidates = self.search(query).await?;
        match candidates.first() {
            Some(best) => {
                debug!(
                    "Falling back to best search hit for {:?}: {} ({} candidates)",
                    query,
                    best.slug,
                    candidates.len()
                );
                self.fetch(&best.slug).await
            }
            None => {
                info!("No problem matches {:?}", query);
                Ok(Resolution::NotFound)
            }
        }
    }

    /// Search the catalog and return matching candidates, best first.
    pub async fn search(&self, query: &str) -> Result<Vec<Candidate>, ResolveError> {
        let entries = self.catalog.search(query).await?;
        let candidates = rank_candidates(query, &entries)?;
        debug!(
            "Search {:?}: {} entries, {} candidates",
            query,
            entries.len(),
            candidates.len()
        );
        Ok(candidates)
    }

    async fn fetch(&self, slug: &str) -> Result<Resolution, ResolveError> {
        match self.catalog.fetch_detail(slug).await? {
            Some(detail) => {
                let record = ProblemRecord::from_detail(detail)?;
                info!("Resolved {}", record.headline());
                Ok(Resolution::Found(record))
            }
            None => Ok(Resolution::NotFound),
        }
    }
}
