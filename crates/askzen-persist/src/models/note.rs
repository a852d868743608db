use askzen_types::Subject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-form study note, independent of conversation threads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub subject: Subject,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub(crate) fn new(title: String, content: String, subject: Subject) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            content,
            subject,
            created_at: now,
            updated_at: now,
        }
    }
}
