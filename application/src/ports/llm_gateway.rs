//! LLM Gateway port
//!
//! Defines the interface for communicating with a chat-completion service.

use async_trait::async_trait;
use leetbud_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Transport-level failure reaching the service
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The service answered with an explicit error
    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("No response content from model")]
    EmptyResponse,
}

impl GatewayError {
    /// Whether the failure happened before the service could answer
    pub fn is_network(&self) -> bool {
        matches!(self, GatewayError::ConnectionError(_))
    }
}

/// Gateway for chat completions
///
/// Stateless from the caller's point of view: every call carries the whole
/// history that should be considered.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Model the gateway sends requests to
    fn model(&self) -> &Model;

    /// Send the ordered history and return the assistant's reply text
    async fn complete(&self, history: &[Message]) -> Result<String, GatewayError>;
}
