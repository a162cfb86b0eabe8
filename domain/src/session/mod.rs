//! Conversation session domain.
//!
//! - [`entities::Message`]: a single message within a conversation
//! - [`history::trim_history`]: sliding-window cap that keeps the pinned
//!   instruction

pub mod entities;
pub mod history;
