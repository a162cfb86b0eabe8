//! Session configuration from TOML (`[session]` section)

use leetbud_application::{DEFAULT_MAX_HISTORY, SessionConfig};
use serde::{Deserialize, Serialize};

/// Raw conversation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Messages kept after the pinned instruction
    pub max_history: usize,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

impl FileSessionConfig {
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig::default().with_max_history(self.max_history)
    }
}
