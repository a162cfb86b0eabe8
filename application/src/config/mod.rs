//! Application-level configuration.
//!
//! - [`SessionConfig`]: conversation window size

pub mod session_config;

pub use session_config::{DEFAULT_MAX_HISTORY, SessionConfig};
