use std::collections::VecDeque;

use askzen_engine::{Answer, AnswerEngine};
use askzen_persist::{ConversationStore, MessageMetadata, NoteStore};
use askzen_types::Subject;
use tracing::{debug, warn};

/// Number of recent queries remembered for suggestions
pub const RECENT_QUERY_LIMIT: usize = 5;

const REGENERATE_PREFIX: &str =
    "Improve on the previous response with a fresh perspective and a higher quality answer to this question: ";

/// The application service: one engine and the stores it writes to.
///
/// Constructed once through [`crate::AskZenBuilder`] and passed to whatever needs it.
pub struct AskZen {
    engine: AnswerEngine,
    conversations: ConversationStore,
    notes: NoteStore,
    recent_queries: VecDeque<String>,
    last_question: Option<(String, Subject)>,
}

impl AskZen {
    pub(crate) fn new(engine: AnswerEngine, conversations: ConversationStore, notes: NoteStore) -> Self {
        Self {
            engine,
            conversations,
            notes,
            recent_queries: VecDeque::with_capacity(RECENT_QUERY_LIMIT),
            last_question: None,
        }
    }

    /// Answer a question and record it in the conversation history.
    ///
    /// Answers that carry an error are returned but not saved.
    pub async fn ask(&mut self, query: &str, subject: &Subject) -> Answer {
        let query = query.trim();
        self.remember(query, subject);

        let answer = self.engine.answer(query, subject).await;
        self.record(&answer);
        answer
    }

    /// Ask the last question again, asking for a fresh take. History is not touched.
    pub async fn regenerate(&mut self) -> Option<Answer> {
        let (query, subject) = self.last_question.clone()?;
        debug!(query = %query, "Regenerating answer");

        let prompt = format!("{}{}", REGENERATE_PREFIX, query);
        let mut answer = self.engine.answer(&prompt, &subject).await;
        answer.query = query;
        Some(answer)
    }

    /// Most recent first
    pub fn recent_queries(&self) -> impl Iterator<Item = &str> {
        self.recent_queries.iter().map(String::as_str)
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_question.as_ref().map(|(q, _)| q.as_str())
    }

    pub fn set_api_key(&mut self, key: &str) -> anyhow::Result<()> {
        self.engine.set_api_key(key)
    }

    pub fn engine(&self) -> &AnswerEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut AnswerEngine {
        &mut self.engine
    }

    pub fn conversations(&self) -> &ConversationStore {
        &self.conversations
    }

    pub fn conversations_mut(&mut self) -> &mut ConversationStore {
        &mut self.conversations
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteStore {
        &mut self.notes
    }

    fn remember(&mut self, query: &str, subject: &Subject) {
        self.recent_queries.push_front(query.to_string());
        self.recent_queries.truncate(RECENT_QUERY_LIMIT);
        self.last_question = Some((query.to_string(), subject.clone()));
    }

    fn record(&mut self, answer: &Answer) {
        if let Some(error) = &answer.error {
            warn!(error = %error, "Answer not saved to history");
            return;
        }
        self.conversations.add_message(
            &answer.query,
            &answer.text,
            &answer.subject,
            MessageMetadata::from(&answer.metadata),
        );
    }
}
