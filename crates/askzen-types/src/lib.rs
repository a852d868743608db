pub mod analysis;
pub mod config;
pub mod subject;

pub use analysis::{AnswerMetadata, Difficulty, QueryAnalysis, QuestionType};
pub use config::ModelConfig;
pub use subject::Subject;
