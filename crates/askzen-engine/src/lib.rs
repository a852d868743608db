//! Answer engine for AskZen: keyword routing over built-in knowledge tables,
//! response formatting, and an optional chat-completion backend.

pub mod analysis;
pub mod config;
pub mod definitions;
pub mod engine;
pub mod formatter;
pub mod knowledge;
pub mod prompts;
pub mod router;
pub mod scoring;
pub mod templates;

pub use analysis::analyze_question;
pub use config::{Backend, EngineConfig};
pub use definitions::{Definition, DefinitionService, DefinitionSet};
pub use engine::{Answer, AnswerEngine, AnswerSource, MISSING_KEY_ERROR};
pub use formatter::ResponseFormatter;
pub use knowledge::{KnowledgeBase, TopicEntry};
pub use prompts::system_prompt;
pub use router::{ConversationContext, ContextEntry, QuestionRouter, Selection, SelectionKind};
pub use scoring::{KeywordScorer, MaxScorer, Scorer, ScoringStrategy, WordOverlapScorer};
