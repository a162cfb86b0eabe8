//! Interactive tutoring module
//!
//! Provides a readline-based conversation about one practice problem at a time.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::TutorRepl;
