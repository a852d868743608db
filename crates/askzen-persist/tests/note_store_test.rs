use std::sync::Arc;

use askzen_persist::{KeyValueStore, MemoryStore, NoteStore, PersistError, NOTES_KEY};
use askzen_types::Subject;

#[test]
fn test_create_list_by_subject() {
    let mut notes = NoteStore::open(Arc::new(MemoryStore::new()));
    notes.create("Pythagoras", "a² + b² = c²", &Subject::Math).unwrap();
    notes.create("Newton", "F = ma", &Subject::SciencePhysics).unwrap();
    notes.create("Circle", "A = πr²", &Subject::Math).unwrap();

    let math = notes.list(Some(&Subject::Math));
    assert_eq!(math.len(), 2);
    // newest first
    assert_eq!(math[0].title, "Circle");
    assert_eq!(notes.list(None).len(), 3);
}

#[test]
fn test_incomplete_note_is_rejected() {
    let mut notes = NoteStore::open(Arc::new(MemoryStore::new()));

    let err = notes.create("   ", "content", &Subject::English).unwrap_err();
    assert!(matches!(err, PersistError::InvalidNote(_)));
    assert!(notes.create("title", "", &Subject::English).is_err());
    assert!(notes.is_empty());
}

#[test]
fn test_update_and_delete() {
    let backend = MemoryStore::new();
    let mut notes = NoteStore::open(Arc::new(backend.clone()));
    let id = notes.create(" Draft ", " body ", &Subject::Reasoning).unwrap().id.clone();
    assert_eq!(notes.get(&id).unwrap().title, "Draft");

    let updated = notes.update(&id, "Final", "new body").unwrap();
    assert_eq!(updated.content, "new body");
    assert!(updated.updated_at >= updated.created_at);

    let reopened = NoteStore::open(Arc::new(backend.clone()));
    assert_eq!(reopened.get(&id).unwrap().title, "Final");

    notes.delete(&id).unwrap();
    assert!(matches!(notes.delete(&id), Err(PersistError::NoteNotFound(_))));
    assert!(matches!(notes.update(&id, "a", "b"), Err(PersistError::NoteNotFound(_))));
    assert_eq!(backend.get(NOTES_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_corrupt_notes_fall_back_to_empty() {
    let backend = MemoryStore::new();
    backend.set(NOTES_KEY, "not json").unwrap();

    let notes = NoteStore::open(Arc::new(backend));
    assert!(notes.is_empty());
}

#[test]
fn test_list_matches_unknown_subject_regardless_of_case() {
    let mut notes = NoteStore::open(Arc::new(MemoryStore::new()));
    notes.create("Ragas", "Yaman, Bhairav", &Subject::from("Music")).unwrap();

    let music = notes.list(Some(&Subject::from("music")));
    assert_eq!(music.len(), 1);
    assert_eq!(music[0].subject.as_str(), "music");
}
