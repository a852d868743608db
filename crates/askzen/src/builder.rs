use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use askzen_engine::{AnswerEngine, EngineConfig, KnowledgeBase};
use askzen_llm::{ChatClient, ProviderConfig};
use askzen_persist::{ConversationStore, FileStore, KeyValueStore, MemoryStore, NoteStore};
use tracing::info;

use crate::app::AskZen;

/// Where conversations and notes are kept
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StorageConfig {
    /// Lost when the process exits
    #[default]
    Memory,
    /// One JSON document per storage key inside this directory
    Directory(PathBuf),
}

/// Builder for the [`AskZen`] application service
pub struct AskZenBuilder {
    storage: StorageConfig,
    backend: Option<Arc<dyn KeyValueStore>>,
    engine_config: EngineConfig,
    knowledge: Option<KnowledgeBase>,
    api_key: Option<String>,
    chat_client: Option<Arc<dyn ChatClient>>,
}

impl AskZenBuilder {
    pub fn new() -> Self {
        Self {
            storage: StorageConfig::default(),
            backend: None,
            engine_config: EngineConfig::default(),
            knowledge: None,
            api_key: None,
            chat_client: None,
        }
    }

    pub fn storage(mut self, storage: StorageConfig) -> Self {
        self.storage = storage;
        self
    }

    /// Persist under `dir`
    pub fn storage_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.storage(StorageConfig::Directory(dir.into()))
    }

    pub fn in_memory(self) -> Self {
        self.storage(StorageConfig::Memory)
    }

    /// Use an existing key-value backend; overrides [`StorageConfig`]
    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.backend = Some(store);
        self
    }

    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = config;
        self
    }

    pub fn provider(mut self, provider: ProviderConfig) -> Self {
        self.engine_config.provider = provider;
        self
    }

    pub fn knowledge(mut self, knowledge: KnowledgeBase) -> Self {
        self.knowledge = Some(knowledge);
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Supply a chat client directly; takes precedence over `api_key`
    pub fn chat_client(mut self, client: Arc<dyn ChatClient>) -> Self {
        self.chat_client = Some(client);
        self
    }

    pub fn build(self) -> Result<AskZen> {
        let store: Arc<dyn KeyValueStore> = match (self.backend, self.storage) {
            (Some(store), _) => store,
            (None, StorageConfig::Memory) => Arc::new(MemoryStore::new()),
            (None, StorageConfig::Directory(dir)) => {
                let store = FileStore::new(dir.clone())
                    .with_context(|| format!("Failed to open storage directory {}", dir.display()))?;
                info!(path = %store.root().display(), "Using file storage");
                Arc::new(store)
            }
        };

        let mut engine = match self.knowledge {
            Some(knowledge) => AnswerEngine::with_knowledge(self.engine_config, knowledge),
            None => AnswerEngine::new(self.engine_config),
        };
        match (self.chat_client, self.api_key) {
            (Some(client), _) => engine = engine.with_chat_client(client),
            (None, Some(key)) => engine
                .set_api_key(&key)
                .context("Failed to configure chat client")?,
            (None, None) => {}
        }

        let conversations = ConversationStore::open(store.clone());
        let notes = NoteStore::open(store);
        info!(
            threads = conversations.len(),
            notes = notes.len(),
            backend = ?engine.config().backend,
            "AskZen ready"
        );

        Ok(AskZen::new(engine, conversations, notes))
    }
}

impl Default for AskZenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
