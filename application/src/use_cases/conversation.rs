//! Conversation session use case.
//!
//! Owns the ordered message log of one tutoring conversation. The log is
//! seeded with a pinned system instruction by [`ConversationSession::begin`];
//! each [`ConversationSession::turn`] appends the user's text, sends the whole
//! log to the [`LlmGateway`], and appends the reply.
//!
//! After every successful turn the log is capped at the pinned instruction
//! plus the `max_history` most recent messages (see [`trim_history`]).

use crate::config::SessionConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use leetbud_domain::{Message, Model, Role, trim_history};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during a conversation turn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Conversation has not been started")]
    NotStarted,
}

/// A bounded conversation with a pinned system instruction.
///
/// One session serves one conversation at a time; `turn` takes `&mut self`,
/// so concurrent turns on the same session cannot be expressed.
pub struct ConversationSession {
    gateway: Arc<dyn LlmGateway>,
    config: SessionConfig,
    messages: Vec<Message>,
}

impl ConversationSession {
    pub fn new(gateway: Arc<dyn LlmGateway>, config: SessionConfig) -> Self {
        Self {
            gateway,
            config,
            messages: Vec::new(),
        }
    }

    /// Reset the log to a single system message holding `instruction`.
    ///
    /// Calling it again discards the previous conversation.
    pub fn begin(&mut self, instruction: impl Into<String>) {
        self.messages.clear();
        self.messages.push(Message::system(instruction));
        debug!("Conversation started");
    }

    /// Send one user message and return the assistant's reply.
    ///
    /// On failure the user message stays in the log and no reply is added;
    /// nothing is retried.
    pub async fn turn(&mut self, user_text: impl Into<String>) -> Result<String, ConversationError> {
        if !self.is_started() {
            return Err(ConversationError::NotStarted);
        }

        self.messages.push(Message::user(user_text));
        debug!(
            "Sending {} messages to {}",
            self.messages.len(),
            self.gateway.model()
        );

        let reply = self.gateway.complete(&self.messages).await?;
        self.messages.push(Message::assistant(reply.clone()));

        let dropped = trim_history(&mut self.messages, self.config.max_history);
        if dropped > 0 {
            debug!(
                "Trimmed {} messages, {} remain",
                dropped,
                self.messages.len()
            );
        }

        Ok(reply)
    }

    pub fn is_started(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Current log, pinned instruction first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of assistant replies still in the log
    pub fn turn_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .count()
    }

    pub fn max_history(&self) -> usize {
        self.config.max_history
    }

    pub fn model(&self) -> &Model {
        self.gateway.model()
    }
}
