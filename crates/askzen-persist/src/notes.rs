use std::sync::Arc;

use askzen_types::Subject;
use chrono::Utc;

use crate::error::{PersistError, Result};
use crate::models::Note;
use crate::storage::KeyValueStore;

/// Storage key of the notes document
pub const NOTES_KEY: &str = "askzen_notes";

/// User-managed study notes, newest first, persisted as one JSON array
pub struct NoteStore {
    backend: Arc<dyn KeyValueStore>,
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn open(backend: Arc<dyn KeyValueStore>) -> Self {
        let notes = match Self::load(backend.as_ref()) {
            Ok(notes) => notes,
            Err(e) => {
                tracing::error!("Error loading notes: {}", e);
                Vec::new()
            }
        };
        Self { backend, notes }
    }

    fn load(backend: &dyn KeyValueStore) -> Result<Vec<Note>> {
        match backend.get(NOTES_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.notes)
            .map_err(PersistError::from)
            .and_then(|raw| self.backend.set(NOTES_KEY, &raw));
        if let Err(e) = result {
            tracing::error!("Error saving notes: {}", e);
        }
    }

    fn validate(title: &str, content: &str) -> Result<(String, String)> {
        let (title, content) = (title.trim(), content.trim());
        if title.is_empty() || content.is_empty() {
            return Err(PersistError::InvalidNote(
                "title and content are both required".to_string(),
            ));
        }
        Ok((title.to_string(), content.to_string()))
    }

    pub fn create(&mut self, title: &str, content: &str, subject: &Subject) -> Result<&Note> {
        let (title, content) = Self::validate(title, content)?;
        self.notes.insert(0, Note::new(title, content, subject.clone()));
        self.persist();
        Ok(&self.notes[0])
    }

    pub fn update(&mut self, id: &str, title: &str, content: &str) -> Result<&Note> {
        let (title, content) = Self::validate(title, content)?;
        let idx = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| PersistError::NoteNotFound(id.to_string()))?;

        let note = &mut self.notes[idx];
        note.title = title;
        note.content = content;
        note.updated_at = Utc::now().max(note.created_at);
        self.persist();
        Ok(&self.notes[idx])
    }

    pub fn delete(&mut self, id: &str) -> Result<Note> {
        let idx = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| PersistError::NoteNotFound(id.to_string()))?;
        let removed = self.notes.remove(idx);
        self.persist();
        Ok(removed)
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Notes for one subject, or all notes when `subject` is `None`
    pub fn list(&self, subject: Option<&Subject>) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| subject.map_or(true, |s| &n.subject == s))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
