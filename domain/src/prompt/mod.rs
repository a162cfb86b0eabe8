//! Prompt domain
//!
//! Builds the pinned system instruction for a tutoring session.

mod template;

pub use template::TutorPrompt;
