//! Presentation layer for leetbud
//!
//! This crate contains CLI definitions, output formatting,
//! the thinking spinner, and the interactive tutoring REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ReplCommand, TutorRepl};
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::ThinkingSpinner;
