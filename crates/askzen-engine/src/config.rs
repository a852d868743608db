use askzen_llm::ProviderConfig;
use askzen_types::ModelConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::router::{DEFAULT_CONTEXT_WINDOW, DEFAULT_MATCH_THRESHOLD};
use crate::scoring::ScoringStrategy;

/// Where answers come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Built-in knowledge tables and the response formatter
    #[default]
    Local,
    /// A chat-completion endpoint, authenticated with a user-supplied key
    Remote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub backend: Backend,
    pub match_threshold: f64,
    pub context_window: usize,
    /// Simulated thinking time before a local answer is returned
    pub thinking_delay_ms: u64,
    pub scoring: ScoringStrategy,
    pub model: ModelConfig,
    pub provider: ProviderConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Local,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            context_window: DEFAULT_CONTEXT_WINDOW,
            thinking_delay_ms: 0,
            scoring: ScoringStrategy::default(),
            model: ModelConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = threshold;
        self
    }

    pub fn with_context_window(mut self, window: usize) -> Self {
        self.context_window = window;
        self
    }

    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringStrategy) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_model(mut self, model: ModelConfig) -> Self {
        self.model = model;
        self
    }

    pub fn with_provider(mut self, provider: ProviderConfig) -> Self {
        self.provider = provider;
        self
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.backend, Backend::Local);
        assert_eq!(config.match_threshold, 0.3);
        assert_eq!(config.context_window, 5);
        assert_eq!(config.thinking_delay(), Duration::ZERO);
    }

    #[test]
    fn test_thinking_delay_saturates() {
        let config = EngineConfig::new().with_thinking_delay(Duration::from_millis(1500));
        assert_eq!(config.thinking_delay_ms, 1500);

        let config = EngineConfig::new().with_thinking_delay(Duration::MAX);
        assert_eq!(config.thinking_delay_ms, u64::MAX);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"backend": "remote", "scoring": "combined"}"#).unwrap();
        assert_eq!(config.backend, Backend::Remote);
        assert_eq!(config.scoring, ScoringStrategy::Combined);
        assert_eq!(config.provider, ProviderConfig::Perplexity);
    }
}
