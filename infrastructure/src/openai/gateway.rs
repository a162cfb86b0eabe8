//! OpenAI-compatible LLM Gateway implementation

use super::protocol::{ChatCompletionRequest, parse_completion};
use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use leetbud_application::{GatewayError, LlmGateway};
use leetbud_domain::{Message, Model};
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for [`OpenAiGateway`]
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: Model,
    pub max_tokens: u32,
    pub timeout: Option<Duration>,
}

impl OpenAiSettings {
    /// Settings from the `[providers.openai]` section and a resolved key
    pub fn from_config(config: &FileOpenAiConfig, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: config.base_url.clone(),
            model: config.model.parse().unwrap_or_default(),
            max_tokens: config.max_tokens,
            timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// LLM Gateway for any service speaking the OpenAI chat-completions API
pub struct OpenAiGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: Model,
    max_tokens: u32,
}

impl OpenAiGateway {
    pub fn new(settings: OpenAiSettings) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            GatewayError::ConnectionError(format!("Failed to build HTTP client: {}", e))
        })?;

        let endpoint = format!(
            "{}/v1/chat/completions",
            settings.base_url.trim_end_matches('/')
        );
        info!("OpenAiGateway initialized ({}, {})", endpoint, settings.model);

        Ok(Self {
            client,
            endpoint,
            api_key: settings.api_key,
            model: settings.model,
            max_tokens: settings.max_tokens,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn complete(&self, history: &[Message]) -> Result<String, GatewayError> {
        let request = ChatCompletionRequest {
            model: self.model.as_str(),
            messages: history,
            max_tokens: self.max_tokens,
        };

        debug!(
            model = %self.model,
            messages = history.len(),
            "Calling chat completions"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::ConnectionError(format!("Failed to read response: {}", e)))?;

        parse_completion(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str) -> OpenAiSettings {
        OpenAiSettings {
            api_key: "sk-test".to_string(),
            base_url: base_url.to_string(),
            model: Model::Gpt4,
            max_tokens: 1500,
            timeout: Some(Duration::from_secs(2)),
        }
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let gateway = OpenAiGateway::new(settings("https://api.openai.com/")).unwrap();
        assert_eq!(gateway.endpoint(), "https://api.openai.com/v1/chat/completions");
        assert_eq!(gateway.model(), &Model::Gpt4);
    }

    #[test]
    fn test_settings_from_config() {
        let config = FileOpenAiConfig {
            model: "gpt-4o-mini".to_string(),
            max_tokens: 700,
            timeout_secs: Some(30),
            ..Default::default()
        };
        let settings = OpenAiSettings::from_config(&config, "sk-abc");
        assert_eq!(settings.api_key, "sk-abc");
        assert_eq!(settings.base_url, "https://api.openai.com");
        assert_eq!(settings.model, Model::Gpt4oMini);
        assert_eq!(settings.max_tokens, 700);
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_connection_error() {
        let gateway = OpenAiGateway::new(settings("http://127.0.0.1:9")).unwrap();
        let err = gateway
            .complete(&[Message::system("SYS"), Message::user("hi")])
            .await
            .unwrap_err();
        assert!(err.is_network());
    }
}
