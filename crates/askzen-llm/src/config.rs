// Configuration layer for provider-agnostic client creation

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PERPLEXITY_API_BASE: &str = "https://api.perplexity.ai";
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Type of chat-completion provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    #[default]
    Perplexity,
    OpenAI,
    Custom,
}

/// Where to send completions. The API key is not part of this:
/// it is supplied by the end user at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    Perplexity,
    OpenAI,
    Custom { base_url: String },
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig::Perplexity
    }
}

impl ProviderConfig {
    pub fn custom(base_url: impl Into<String>) -> Self {
        Self::Custom {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        match self {
            Self::Perplexity => PERPLEXITY_API_BASE,
            Self::OpenAI => OPENAI_API_BASE,
            Self::Custom { base_url } => base_url,
        }
    }

    pub fn provider_type(&self) -> ProviderType {
        match self {
            Self::Perplexity => ProviderType::Perplexity,
            Self::OpenAI => ProviderType::OpenAI,
            Self::Custom { .. } => ProviderType::Custom,
        }
    }
}

/// Factory for creating chat clients from configuration
pub struct ClientFactory;

impl ClientFactory {
    pub fn create_chat_client(
        config: &ProviderConfig,
        api_key: impl Into<String>,
    ) -> Result<Arc<dyn crate::traits::ChatClient>> {
        let client = crate::completions::CompletionClient::with_base_url(api_key, config.base_url())?;
        Ok(Arc::new(client))
    }
}
