use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rough intent of a question, sniffed from its wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Procedural,
    Explanatory,
    Definitional,
    ProblemSolving,
    #[default]
    General,
}

impl QuestionType {
    /// Classify a question. The first matching cue wins: how, why, what, solve/calculate.
    pub fn classify(question: &str) -> Self {
        let lower = question.to_lowercase();
        if lower.contains("how") {
            Self::Procedural
        } else if lower.contains("why") {
            Self::Explanatory
        } else if lower.contains("what") {
            Self::Definitional
        } else if lower.contains("solve") || lower.contains("calculate") {
            Self::ProblemSolving
        } else {
            Self::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Procedural => "procedural",
            Self::Explanatory => "explanatory",
            Self::Definitional => "definitional",
            Self::ProblemSolving => "problem-solving",
            Self::General => "general",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic read of a question before an answer is produced.
///
/// `confidence` is synthetic: it reflects which wording cues fired, not any
/// statistical measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    pub confidence: f64,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
}

impl Default for QueryAnalysis {
    fn default() -> Self {
        Self {
            confidence: 0.7,
            difficulty: Difficulty::Intermediate,
            question_type: QuestionType::General,
        }
    }
}

/// Everything attached to an answer besides its text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerMetadata {
    pub confidence: f64,
    pub difficulty: Difficulty,
    pub read_time_minutes: u32,
    pub sources: Vec<String>,
    pub related_topics: Vec<String>,
    pub follow_up_questions: Vec<String>,
    pub key_insights: Vec<String>,
    pub actionables: Vec<String>,
}

impl Default for AnswerMetadata {
    fn default() -> Self {
        Self {
            confidence: 0.8,
            difficulty: Difficulty::Intermediate,
            read_time_minutes: 3,
            sources: Vec::new(),
            related_topics: Vec::new(),
            follow_up_questions: Vec::new(),
            key_insights: Vec::new(),
            actionables: Vec::new(),
        }
    }
}
