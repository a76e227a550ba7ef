//! Groq chat-completions client.
//!
//! Uses Groq's OpenAI-compatible API. Requires the GROQ_API_KEY environment
//! variable; a missing key is not validated up front and surfaces as a
//! credential error on first use.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CompletionBackend, LlmError};

/// Configuration for the Groq client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// API base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model used for every completion.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature; low to bias toward conservative output.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens in the response, if capped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai/v1".to_string()
}
fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}
fn default_temperature() -> f32 {
    0.3
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: None,
        }
    }
}

/// Groq completion client.
pub struct GroqClient {
    config: GroqConfig,
    api_key: Option<String>,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<ChatChoice>>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GroqClient {
    /// Create a client, reading the API key from the environment.
    pub fn new(config: GroqConfig) -> Self {
        Self {
            config,
            api_key: std::env::var("GROQ_API_KEY").ok(),
            client: reqwest::Client::new(),
        }
    }

    /// Set the API key explicitly.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn config(&self) -> &GroqConfig {
        &self.config
    }

    /// Check whether a credential is present.
    pub fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    /// Describe what is needed to make this client usable.
    pub fn availability_hint(&self) -> String {
        if self.api_key.is_none() {
            "GROQ_API_KEY not set. Get an API key from https://console.groq.com/".to_string()
        } else {
            format!("Groq is available (model: {})", self.config.model)
        }
    }
}

#[async_trait]
impl CompletionBackend for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            LlmError::Credential(
                "GROQ_API_KEY not set. Get an API key from https://console.groq.com/".to_string(),
            )
        })?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let url = format!(
            "{}/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        );
        debug!("Requesting completion from {} ({})", url, self.config.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        if let Some(error) = chat_response.error {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error.message,
            });
        }

        chat_response
            .choices
            .and_then(|c| c.into_iter().next())
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::Parse("Response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GroqConfig::default();
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.temperature, 0.3);
        assert!(config.max_tokens.is_none());
        assert!(config.endpoint.starts_with("https://api.groq.com"));
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Summary text"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        let content = parsed
            .choices
            .and_then(|c| c.into_iter().next())
            .map(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("Summary text"));
    }

    #[test]
    fn test_error_body_parsing() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.choices.is_none());
        assert_eq!(parsed.error.unwrap().message, "Invalid API Key");
    }

    #[test]
    fn test_request_omits_unset_max_tokens() {
        let request = ChatRequest {
            model: "llama-3.1-8b-instant".to_string(),
            messages: vec![],
            temperature: 0.3,
            max_tokens: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("max_tokens"));
    }

    #[tokio::test]
    async fn test_missing_credential_fails_on_first_use() {
        let mut client = GroqClient::new(GroqConfig::default());
        client.api_key = None;
        let err = client.complete("system", "user").await.unwrap_err();
        assert!(matches!(err, LlmError::Credential(_)));
    }
}
