//! LeetCode catalog adapter
//!
//! Implements [`ProblemCatalog`] over LeetCode's public bulk listing and
//! GraphQL endpoints.

use super::protocol::{GraphQlRequest, parse_problem_list, parse_question_detail};
use crate::config::FileCatalogConfig;
use async_trait::async_trait;
use leetbud_application::{CatalogError, ProblemCatalog};
use leetbud_domain::{CatalogEntry, ProblemDetail};
use std::time::Duration;
use tracing::{debug, info};

/// Problem catalog backed by leetcode.com
pub struct LeetCodeCatalog {
    client: reqwest::Client,
    api_base: String,
    graphql_url: String,
}

impl LeetCodeCatalog {
    /// Create a catalog client from the `[catalog]` configuration
    pub fn new(config: &FileCatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::Network(format!("Failed to build HTTP client: {}", e)))?;

        info!("LeetCodeCatalog initialized ({})", config.api_base);

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            graphql_url: config.graphql_url.clone(),
        })
    }

    fn problems_url(&self) -> String {
        format!("{}/problems/all", self.api_base)
    }

    async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, CatalogError> {
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Network(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| CatalogError::Network(format!("Failed to read response body: {}", e)))
    }
}

#[async_trait]
impl ProblemCatalog for LeetCodeCatalog {
    async fn search(&self, query: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
        // The listing endpoint has no server-side filter; the whole catalog comes back
        debug!("Fetching problem list for query {:?}", query);

        let response = self
            .client
            .get(self.problems_url())
            .send()
            .await
            .map_err(|e| CatalogError::Network(format!("Failed to fetch problem list: {}", e)))?;

        let body = Self::read_body(response).await?;
        let entries = parse_problem_list(&body)?;
        debug!("Problem list: {} entries", entries.len());
        Ok(entries)
    }

    async fn fetch_detail(&self, slug: &str) -> Result<Option<ProblemDetail>, CatalogError> {
        debug!("Fetching detail for {:?}", slug);

        let response = self
            .client
            .post(&self.graphql_url)
            .json(&GraphQlRequest::question_detail(slug))
            .send()
            .await
            .map_err(|e| CatalogError::Network(format!("Failed to fetch problem detail: {}", e)))?;

        let body = Self::read_body(response).await?;
        parse_question_detail(&body)
    }
}
