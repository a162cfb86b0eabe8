//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; [`FileConfig::validate`] reports values
//! that deserialize fine but cannot work.

mod catalog;
mod output;
mod providers;
mod repl;
mod session;

pub use catalog::FileCatalogConfig;
pub use output::FileOutputConfig;
pub use providers::{FileOpenAiConfig, FileProvidersConfig};
pub use repl::FileReplConfig;
pub use session::FileSessionConfig;

use leetbud_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Narrowest response box that still leaves room for text
pub const MIN_OUTPUT_WIDTH: usize = 20;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Problem catalog endpoints
    pub catalog: FileCatalogConfig,
    /// Chat-completion provider settings
    pub providers: FileProvidersConfig,
    /// Conversation window
    pub session: FileSessionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.providers.openai.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: "providers.openai.model".to_string(),
                },
                "providers.openai.model: model name cannot be empty",
            ));
        }

        for (field, value) in [
            ("catalog.api_base", &self.catalog.api_base),
            ("catalog.graphql_url", &self.catalog.graphql_url),
            ("providers.openai.base_url", &self.providers.openai.base_url),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyUrl {
                        field: field.to_string(),
                    },
                    format!("{}: URL cannot be empty", field),
                ));
            }
        }

        if self.session.max_history == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroMaxHistory,
                "session.max_history: must be at least 1",
            ));
        }

        if self.output.width < MIN_OUTPUT_WIDTH {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::WidthTooSmall {
                    width: self.output.width,
                    min: MIN_OUTPUT_WIDTH,
                },
                format!(
                    "output.width: {} is too narrow, using {}",
                    self.output.width, MIN_OUTPUT_WIDTH
                ),
            ));
        }

        issues
    }

    /// Output width with the minimum applied
    pub fn effective_width(&self) -> usize {
        self.output.width.max(MIN_OUTPUT_WIDTH)
    }
}
