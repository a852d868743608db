use askzen::{Backend, EngineConfig, ModelConfig, ProviderConfig, ScoringStrategy, StorageConfig};
use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const API_KEY_VAR: &str = "ASKZEN_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub storage: StorageSection,
    pub engine: EngineSection,
    pub remote: RemoteSection,
    pub logging: LoggingConfig,

    // Secret (from ENV only)
    #[serde(skip)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    pub dir: PathBuf,
    #[serde(default)]
    pub in_memory: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSection {
    pub backend: Backend,
    pub match_threshold: f64,
    pub context_window: usize,
    #[serde(default)]
    pub thinking_delay_ms: u64,
    #[serde(default)]
    pub scoring: ScoringStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Perplexity,
    OpenAI,
    Custom,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteSection {
    pub provider: ProviderKind,
    #[serde(default)]
    pub base_url: Option<String>,
    pub model: String,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl RemoteSection {
    pub fn provider_config(&self) -> Result<ProviderConfig, ConfigError> {
        match (self.provider, &self.base_url) {
            (ProviderKind::Perplexity, _) => Ok(ProviderConfig::Perplexity),
            (ProviderKind::OpenAI, _) => Ok(ProviderConfig::OpenAI),
            (ProviderKind::Custom, Some(url)) => Ok(ProviderConfig::custom(url.clone())),
            (ProviderKind::Custom, None) => Err(ConfigError::Message(
                "remote.base_url is required for the custom provider".to_string(),
            )),
        }
    }

    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            model: self.model.clone(),
            temperature: self.temperature,
            top_p: self.top_p,
            max_tokens: self.max_tokens,
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables (ASKZEN_ENGINE__BACKEND, ASKZEN_LOGGING__LEVEL, ...)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("ASKZEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut cfg: Config = builder.build()?.try_deserialize()?;

        // Secret from ENV (not in TOML)
        cfg.api_key = std::env::var(API_KEY_VAR).ok().filter(|k| !k.trim().is_empty());

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));
        builder.build()?.try_deserialize()
    }

    pub fn storage_config(&self) -> StorageConfig {
        if self.storage.in_memory {
            StorageConfig::Memory
        } else {
            StorageConfig::Directory(self.storage.dir.clone())
        }
    }

    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        Ok(EngineConfig {
            backend: self.engine.backend,
            match_threshold: self.engine.match_threshold,
            context_window: self.engine.context_window,
            thinking_delay_ms: self.engine.thinking_delay_ms,
            scoring: self.engine.scoring,
            model: self.remote.model_config(),
            provider: self.remote.provider_config()?,
        })
    }
}

/// Built-in defaults, so the binary works outside the crate directory
const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");
