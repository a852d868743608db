//! # AskZen
//!
//! Study assistant library: answers student questions from built-in subject
//! knowledge (or a chat-completion API when a key is supplied), and keeps
//! conversation history and notes in a small key-value store.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use askzen::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut app = AskZenBuilder::new()
//!         .storage_dir("./askzen-data")
//!         .build()?;
//!
//!     let answer = app.ask("quadratic formula", &Subject::Math).await;
//!     println!("{}", answer.text);
//!
//!     for message in app.conversations().search("quadratic") {
//!         println!("{}: {}", message.timestamp, message.query);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`askzen-types`**: subjects, difficulty, answer metadata
//! - **`askzen-llm`**: chat-completion client (Perplexity, OpenAI or any compatible endpoint)
//! - **`askzen-persist`**: conversation threads and notes over a key-value store
//! - **`askzen-engine`**: question router, formatter and answer engine

pub mod app;
pub mod builder;
pub mod prelude;

pub use app::{AskZen, RECENT_QUERY_LIMIT};
pub use builder::{AskZenBuilder, StorageConfig};

pub use askzen_types::{AnswerMetadata, Difficulty, ModelConfig, QueryAnalysis, QuestionType, Subject};

pub use askzen_llm::{
    ChatClient, ChatOptions, ChatRequest, ChatResponse, ClientFactory, CompletionClient, Message,
    ProviderConfig, ProviderType,
};

pub use askzen_persist::{
    export_file_name, ConversationMessage, ConversationStore, ConversationThread, FileStore,
    KeyValueStore, MemoryStore, MessageMetadata, Note, NoteStore, PersistError,
};

pub use askzen_engine::{
    analyze_question, system_prompt, Answer, AnswerEngine, AnswerSource, Backend, Definition,
    DefinitionService, EngineConfig, KnowledgeBase, QuestionRouter, ResponseFormatter, Scorer,
    ScoringStrategy, TopicEntry,
};
