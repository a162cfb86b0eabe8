//! Chat-completion wire types (OpenAI-compatible `/v1/chat/completions`).

use leetbud_application::GatewayError;
use leetbud_domain::Message;
use serde::{Deserialize, Serialize};

/// Request body
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Extract the reply text from a completion response.
///
/// An `{"error": {"message": ..}}` body or a failing status becomes
/// [`GatewayError::ServiceError`]; a success without content becomes
/// [`GatewayError::EmptyResponse`].
pub fn parse_completion(status: u16, body: &[u8]) -> Result<String, GatewayError> {
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
        return Err(GatewayError::ServiceError(envelope.error.message));
    }

    if !(200..300).contains(&status) {
        let snippet: String = String::from_utf8_lossy(body).chars().take(200).collect();
        return Err(GatewayError::ServiceError(format!(
            "HTTP {}: {}",
            status,
            snippet.trim()
        )));
    }

    let response: ChatCompletionResponse = serde_json::from_slice(body)
        .map_err(|e| GatewayError::ServiceError(format!("Malformed completion response: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(GatewayError::EmptyResponse)
}
