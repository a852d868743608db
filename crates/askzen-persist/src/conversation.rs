use std::collections::HashSet;
use std::sync::Arc;

use askzen_types::Subject;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PersistError, Result};
use crate::models::{ConversationMessage, ConversationThread, MessageMetadata};
use crate::storage::KeyValueStore;

/// Storage key of the conversation document
pub const CONVERSATIONS_KEY: &str = "askzen_conversations";

/// Messages returned by [`ConversationStore::conversation_context`] when no limit is given
pub const DEFAULT_CONTEXT_MESSAGES: usize = 5;

/// On-disk shape: `{ threads, currentThreadId }`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredConversations {
    #[serde(default)]
    threads: Vec<ConversationThread>,
    #[serde(default)]
    current_thread_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredConversationsRef<'a> {
    threads: &'a [ConversationThread],
    current_thread_id: Option<&'a str>,
}

/// Conversation history: an ordered list of threads plus a "current" pointer.
///
/// Every mutation writes the whole document back to the key-value store.
/// Storage failures are logged and never surface to the caller; a corrupt
/// document on open yields an empty history.
pub struct ConversationStore {
    backend: Arc<dyn KeyValueStore>,
    threads: Vec<ConversationThread>,
    current_thread_id: Option<String>,
}

impl ConversationStore {
    /// Load history from `backend`, falling back to an empty store
    pub fn open(backend: Arc<dyn KeyValueStore>) -> Self {
        let stored = match Self::load(backend.as_ref()) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::error!("Error loading conversation history: {}", e);
                StoredConversations::default()
            }
        };

        let mut store = Self {
            backend,
            threads: stored.threads,
            current_thread_id: stored.current_thread_id,
        };
        store.repair_current_pointer();
        tracing::info!(threads = store.threads.len(), "conversation history loaded");
        store
    }

    fn load(backend: &dyn KeyValueStore) -> Result<StoredConversations> {
        match backend.get(CONVERSATIONS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(StoredConversations::default()),
        }
    }

    fn persist(&self) {
        let doc = StoredConversationsRef {
            threads: &self.threads,
            current_thread_id: self.current_thread_id.as_deref(),
        };
        let result = serde_json::to_string(&doc)
            .map_err(PersistError::from)
            .and_then(|raw| self.backend.set(CONVERSATIONS_KEY, &raw));
        if let Err(e) = result {
            tracing::error!("Error saving conversation history: {}", e);
        }
    }

    fn position(&self, thread_id: &str) -> Option<usize> {
        self.threads.iter().position(|t| t.id == thread_id)
    }

    /// Keep the current pointer on an existing thread (or none)
    fn repair_current_pointer(&mut self) {
        let dangling = match &self.current_thread_id {
            Some(id) => self.position(id).is_none(),
            None => false,
        };
        if dangling {
            tracing::warn!("current thread no longer exists, resetting pointer");
            self.current_thread_id = self.threads.first().map(|t| t.id.clone());
        }
    }

    /// Start a new thread at the head of the list and make it current
    pub fn create_thread(&mut self, subject: &Subject, title: Option<&str>) -> String {
        let thread = ConversationThread::new(subject.clone(), title);
        let id = thread.id.clone();
        tracing::debug!(thread_id = %id, subject = %subject, "created thread");

        self.threads.insert(0, thread);
        self.current_thread_id = Some(id.clone());
        self.persist();
        id
    }

    /// Append an answered question to the current thread, creating one if needed.
    ///
    /// Returns the id of the new message.
    pub fn add_message(
        &mut self,
        query: &str,
        response: &str,
        subject: &Subject,
        metadata: MessageMetadata,
    ) -> String {
        let existing = self
            .current_thread_id
            .as_deref()
            .and_then(|id| self.position(id));
        let idx = match existing {
            Some(idx) => idx,
            None => {
                let id = self.create_thread(subject, None);
                self.position(&id).unwrap_or(0)
            }
        };

        let message = ConversationMessage::new(query, response, subject.clone(), metadata);
        let message_id = message.id.clone();
        self.threads[idx].push(message);
        self.persist();
        message_id
    }

    /// Make `thread_id` current. Unknown ids leave the pointer where it was.
    pub fn switch_thread(&mut self, thread_id: &str) -> Result<()> {
        if self.position(thread_id).is_none() {
            tracing::warn!(thread_id, "switch to unknown thread ignored");
            return Err(PersistError::ThreadNotFound(thread_id.to_string()));
        }
        self.current_thread_id = Some(thread_id.to_string());
        self.persist();
        Ok(())
    }

    /// Remove a thread. If it was current, the first remaining thread becomes current.
    pub fn delete_thread(&mut self, thread_id: &str) -> Result<ConversationThread> {
        let idx = self
            .position(thread_id)
            .ok_or_else(|| PersistError::ThreadNotFound(thread_id.to_string()))?;
        let removed = self.threads.remove(idx);

        if self.current_thread_id.as_deref() == Some(thread_id) {
            self.current_thread_id = self.threads.first().map(|t| t.id.clone());
        }
        self.persist();
        Ok(removed)
    }

    pub fn current_thread(&self) -> Option<&ConversationThread> {
        self.current_thread_id
            .as_deref()
            .and_then(|id| self.threads.iter().find(|t| t.id == id))
    }

    pub fn current_thread_id(&self) -> Option<&str> {
        self.current_thread_id.as_deref()
    }

    pub fn thread(&self, thread_id: &str) -> Option<&ConversationThread> {
        self.threads.iter().find(|t| t.id == thread_id)
    }

    /// All threads, most recently updated first
    pub fn threads(&self) -> Vec<&ConversationThread> {
        let mut threads: Vec<&ConversationThread> = self.threads.iter().collect();
        threads.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        threads
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    /// Case-insensitive substring search over every message, newest first
    pub fn search(&self, query: &str) -> Vec<&ConversationMessage> {
        let needle = query.to_lowercase();
        let mut results: Vec<&ConversationMessage> = self
            .threads
            .iter()
            .flat_map(|t| t.messages.iter())
            .filter(|m| m.matches(&needle))
            .collect();
        results.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        results
    }

    /// The last `max_messages` messages of the current thread
    pub fn conversation_context(&self, max_messages: usize) -> &[ConversationMessage] {
        match self.current_thread() {
            Some(thread) => {
                let start = thread.messages.len().saturating_sub(max_messages);
                &thread.messages[start..]
            }
            None => &[],
        }
    }

    /// Serialize the thread list as a pretty-printed JSON array
    pub fn export_all(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.threads)?)
    }

    /// Replace the thread list with an exported one.
    ///
    /// Returns `false` and leaves the store untouched if `json` is not a
    /// valid array of threads.
    pub fn import_all(&mut self, json: &str) -> bool {
        match self.try_import(json) {
            Ok(count) => {
                tracing::info!(threads = count, "imported conversation history");
                true
            }
            Err(e) => {
                tracing::error!("Import failed: {}", e);
                false
            }
        }
    }

    /// Like [`import_all`](Self::import_all) but reports why an import was rejected
    pub fn try_import(&mut self, json: &str) -> Result<usize> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_array() {
            return Err(PersistError::InvalidImport(
                "expected a JSON array of threads".to_string(),
            ));
        }
        let threads: Vec<ConversationThread> = serde_json::from_value(value)?;

        let mut seen = HashSet::new();
        if let Some(dup) = threads.iter().find(|t| !seen.insert(t.id.as_str())) {
            return Err(PersistError::InvalidImport(format!(
                "duplicate thread id {}",
                dup.id
            )));
        }

        let count = threads.len();
        self.threads = threads;
        self.repair_current_pointer();
        self.persist();
        Ok(count)
    }

    pub fn clear_all(&mut self) {
        self.threads.clear();
        self.current_thread_id = None;
        self.persist();
    }
}

/// Suggested file name for an export taken on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("askzen-conversations-{}.json", date.format("%Y-%m-%d"))
}
