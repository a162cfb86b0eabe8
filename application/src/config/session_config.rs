//! Conversation session parameters.

use serde::{Deserialize, Serialize};

/// Default number of recent messages kept besides the pinned instruction.
pub const DEFAULT_MAX_HISTORY: usize = 10;

/// Parameters for [`ConversationSession`](crate::use_cases::conversation::ConversationSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Upper bound on messages kept after the pinned instruction.
    pub max_history: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

impl SessionConfig {
    pub fn with_max_history(mut self, max: usize) -> Self {
        self.max_history = max;
        self
    }
}
