use std::collections::BTreeSet;

use askzen_types::Subject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ConversationMessage;

const TITLE_MAX_CHARS: usize = 60;

/// A saved sequence of question/answer exchanges under one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationThread {
    pub id: String,
    pub title: String,
    pub subject: Subject,
    #[serde(default)]
    pub messages: Vec<ConversationMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl ConversationThread {
    pub(crate) fn new(subject: Subject, title: Option<&str>) -> Self {
        let now = Utc::now();
        let title = match title.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => Self::default_title(&subject),
        };
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            tags: BTreeSet::from([subject.to_string()]),
            subject,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn default_title(subject: &Subject) -> String {
        format!("New {} conversation", subject)
    }

    pub fn has_default_title(&self) -> bool {
        self.title.starts_with("New ")
    }

    /// `"{subject}: {query}"`, with long queries cut at 60 characters
    pub fn generate_title(query: &str, subject: &Subject) -> String {
        let query = query.trim();
        let title = if query.chars().count() > TITLE_MAX_CHARS {
            let cut: String = query.chars().take(TITLE_MAX_CHARS).collect();
            format!("{}...", cut)
        } else {
            query.to_string()
        };
        format!("{}: {}", subject, title)
    }

    pub(crate) fn push(&mut self, message: ConversationMessage) {
        self.updated_at = message.timestamp.max(self.created_at);
        self.messages.push(message);
        if self.messages.len() == 1 && self.has_default_title() {
            let first = &self.messages[0];
            self.title = Self::generate_title(&first.query, &first.subject);
        }
    }

    pub fn last_message(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageMetadata;

    #[test]
    fn test_new_thread_defaults() {
        let thread = ConversationThread::new(Subject::Science, None);
        assert_eq!(thread.title, "New science conversation");
        assert!(thread.tags.contains("science"));
        assert!(thread.messages.is_empty());

        let titled = ConversationThread::new(Subject::Math, Some("  Exam prep "));
        assert_eq!(titled.title, "Exam prep");
    }

    #[test]
    fn test_generate_title_truncates_on_char_boundary() {
        let long = "é".repeat(70);
        let title = ConversationThread::generate_title(&long, &Subject::English);
        assert_eq!(title, format!("english: {}...", "é".repeat(60)));

        let short = ConversationThread::generate_title("what is gravity?", &Subject::Science);
        assert_eq!(short, "science: what is gravity?");
    }

    #[test]
    fn test_first_message_retitles_default_thread_only() {
        let mut thread = ConversationThread::new(Subject::Science, None);
        thread.push(ConversationMessage::new("why?", "because", Subject::Science, MessageMetadata::default()));
        assert_eq!(thread.title, "science: why?");

        let mut custom = ConversationThread::new(Subject::Science, Some("Homework"));
        custom.push(ConversationMessage::new("why?", "because", Subject::Science, MessageMetadata::default()));
        assert_eq!(custom.title, "Homework");
        assert!(custom.updated_at >= custom.created_at);
    }
}
