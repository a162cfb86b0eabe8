//! Catalog configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};

/// Raw catalog endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Base of the REST API; the bulk listing lives at `{api_base}/problems/all`
    pub api_base: String,
    /// GraphQL endpoint for problem detail
    pub graphql_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds (transport default when unset)
    pub timeout_secs: Option<u64>,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            api_base: "https://leetcode.com/api".to_string(),
            graphql_url: "https://leetcode.com/graphql".to_string(),
            user_agent: "LeetBud".to_string(),
            timeout_secs: None,
        }
    }
}
