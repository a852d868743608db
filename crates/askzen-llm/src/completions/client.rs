// HTTP client for OpenAI-compatible /chat/completions endpoints

use crate::config::PERPLEXITY_API_BASE;
use crate::traits::{ChatClient, ChatOptions, ChatRequest, ChatResponse, TokenUsage};
use crate::types::Message;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Bearer-token chat-completion client (HTTP direct, no SDK)
pub struct CompletionClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CompletionClient {
    /// Create new client against Perplexity
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, PERPLEXITY_API_BASE)
    }

    /// Create new client against any OpenAI-compatible base URL
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .context("Invalid API key format")?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build chat completion request payload
    fn build_chat_request(&self, model: &str, messages: &[Message], options: &ChatOptions) -> Value {
        let mut obj = Map::new();
        obj.insert("model".to_string(), Value::from(model));
        obj.insert(
            "messages".to_string(),
            Value::Array(messages.iter().map(convert_message).collect()),
        );

        if let Some(temp) = options.temperature {
            obj.insert("temperature".to_string(), serde_json::json!(temp));
        }
        if let Some(top_p) = options.top_p {
            obj.insert("top_p".to_string(), serde_json::json!(top_p));
        }
        if let Some(max_tokens) = options.max_tokens {
            obj.insert("max_tokens".to_string(), serde_json::json!(max_tokens));
        }
        if let Some(penalty) = options.frequency_penalty {
            obj.insert("frequency_penalty".to_string(), serde_json::json!(penalty));
        }
        if let Some(penalty) = options.presence_penalty {
            obj.insert("presence_penalty".to_string(), serde_json::json!(penalty));
        }
        for (key, value) in &options.extra {
            obj.insert(key.clone(), value.clone());
        }

        Value::Object(obj)
    }
}

fn convert_message(message: &Message) -> Value {
    serde_json::json!({
        "role": message.role(),
        "content": message.content(),
    })
}

#[async_trait]
impl ChatClient for CompletionClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let payload = self.build_chat_request(&request.model, &request.messages, &request.options);

        tracing::debug!(model = %request.model, messages = request.messages.len(), "sending chat completion");

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&payload)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed ({}): {}", status, error_text);
        }

        let raw: Value = response
            .json()
            .await
            .context("Failed to parse response")?;

        let parsed: CompletionResponse = serde_json::from_value(raw.clone())
            .context("Invalid response format from AI service")?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .context("Invalid response format from AI service: no choices")?;
        let content = choice
            .message
            .content
            .context("Invalid response format from AI service: empty message")?;

        Ok(ChatResponse {
            content,
            usage: parsed.usage.map(|u| TokenUsage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason,
            raw,
        })
    }
}

// ============================================================================
// WIRE RESPONSE TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CompletionResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_shape() {
        let client = CompletionClient::with_base_url("key", "http://localhost/").unwrap();
        assert_eq!(client.base_url(), "http://localhost");

        let options = ChatOptions::new()
            .temperature(0.3)
            .max_tokens(2000)
            .extra("search_recency_filter", "month");
        let payload = client.build_chat_request(
            "model-x",
            &[Message::system("be helpful"), Message::human("hi")],
            &options,
        );

        assert_eq!(payload["model"], "model-x");
        assert_eq!(payload["messages"][0]["role"], "system");
        assert_eq!(payload["messages"][1]["content"], "hi");
        assert_eq!(payload["max_tokens"], 2000);
        assert_eq!(payload["search_recency_filter"], "month");
        assert!(payload.get("top_p").is_none());
    }
}
