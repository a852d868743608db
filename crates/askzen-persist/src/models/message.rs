use askzen_types::{AnswerMetadata, Difficulty, Subject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One answered question. Immutable once appended to its thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMessage {
    pub id: String,
    pub query: String,
    pub response: String,
    pub subject: Subject,
    pub timestamp: DateTime<Utc>,
    pub metadata: MessageMetadata,
}

impl ConversationMessage {
    pub(crate) fn new(
        query: impl Into<String>,
        response: impl Into<String>,
        subject: Subject,
        metadata: MessageMetadata,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            query: query.into(),
            response: response.into(),
            subject,
            timestamp: Utc::now(),
            metadata: metadata.normalized(),
        }
    }

    /// Case-insensitive match against query or response text
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.query.to_lowercase().contains(needle_lower)
            || self.response.to_lowercase().contains(needle_lower)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageMetadata {
    pub confidence: f64,
    pub difficulty: Difficulty,
    /// Estimated minutes to read the response
    pub read_time: u32,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub key_insights: Vec<String>,
}

impl Default for MessageMetadata {
    fn default() -> Self {
        Self {
            confidence: 0.8,
            difficulty: Difficulty::Intermediate,
            read_time: 3,
            sources: Vec::new(),
            key_insights: Vec::new(),
        }
    }
}

impl MessageMetadata {
    fn normalized(mut self) -> Self {
        self.confidence = if self.confidence.is_finite() {
            self.confidence.clamp(0.0, 1.0)
        } else {
            MessageMetadata::default().confidence
        };
        self
    }
}

impl From<&AnswerMetadata> for MessageMetadata {
    fn from(meta: &AnswerMetadata) -> Self {
        Self {
            confidence: meta.confidence,
            difficulty: meta.difficulty,
            read_time: meta.read_time_minutes,
            sources: meta.sources.clone(),
            key_insights: meta.key_insights.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        let meta = MessageMetadata {
            confidence: 1.7,
            ..Default::default()
        };
        let msg = ConversationMessage::new("q", "r", Subject::Math, meta);
        assert_eq!(msg.metadata.confidence, 1.0);

        let meta = MessageMetadata {
            confidence: f64::NAN,
            ..Default::default()
        };
        let msg = ConversationMessage::new("q", "r", Subject::Math, meta);
        assert_eq!(msg.metadata.confidence, 0.8);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let msg = ConversationMessage::new("q", "r", Subject::English, MessageMetadata::default());
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["subject"], "english");
        assert_eq!(json["metadata"]["readTime"], 3);
        assert!(json["metadata"]["keyInsights"].is_array());
        // RFC 3339 string, parsed back into a timestamp on load
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }
}
