//! OpenAI-compatible chat-completion adapter
//!
//! Implements [`LlmGateway`](leetbud_application::LlmGateway) over HTTP.

pub mod gateway;
pub mod protocol;
