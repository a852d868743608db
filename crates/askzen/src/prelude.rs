//! Prelude module for convenient imports
//!
//! ```rust
//! use askzen::prelude::*;
//! ```

pub use crate::{
    AskZen, AskZenBuilder, StorageConfig,
    Subject, Difficulty, AnswerMetadata,
    Answer, AnswerEngine, AnswerSource, Backend, EngineConfig, ScoringStrategy,
    ConversationStore, ConversationThread, ConversationMessage, NoteStore, Note,
    ProviderConfig, ChatClient,
};
