use std::sync::Arc;

use askzen_persist::{
    ConversationStore, FileStore, KeyValueStore, MemoryStore, MessageMetadata, CONVERSATIONS_KEY,
};
use askzen_types::{Difficulty, Subject};

fn memory_store() -> (MemoryStore, ConversationStore) {
    let backend = MemoryStore::new();
    let store = ConversationStore::open(Arc::new(backend.clone()));
    (backend, store)
}

#[test]
fn test_science_scenario() {
    let (_, mut store) = memory_store();

    store.create_thread(&Subject::Science, None);
    store.add_message("what is gravity?", "...", &Subject::Science, MessageMetadata::default());

    assert_eq!(store.len(), 1);
    let thread = store.current_thread().unwrap();
    assert_eq!(thread.messages.len(), 1);
    assert!(thread.title.starts_with("science:"));

    let results = store.search("gravity");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].query, "what is gravity?");
}

#[test]
fn test_add_message_increments_by_one() {
    let (_, mut store) = memory_store();
    let id = store.create_thread(&Subject::Math, None);

    for expected in 1..=3 {
        store.add_message("solve x", "x = 4", &Subject::Math, MessageMetadata::default());
        let thread = store.thread(&id).unwrap();
        assert_eq!(thread.messages.len(), expected);
        assert!(thread.updated_at >= thread.created_at);
    }
}

#[test]
fn test_messages_keep_insertion_order() {
    let (_, mut store) = memory_store();
    for q in ["first", "second", "third"] {
        store.add_message(q, "answer", &Subject::English, MessageMetadata::default());
    }

    let queries: Vec<&str> = store
        .current_thread()
        .unwrap()
        .messages
        .iter()
        .map(|m| m.query.as_str())
        .collect();
    assert_eq!(queries, ["first", "second", "third"]);
}

#[test]
fn test_search_is_case_insensitive_over_query_and_response() {
    let (_, mut store) = memory_store();
    store.add_message("Photosynthesis?", "Plants make FOOD from light", &Subject::ScienceBiology, MessageMetadata::default());
    store.create_thread(&Subject::Math, None);
    store.add_message("area of a circle", "pi r squared", &Subject::Math, MessageMetadata::default());

    assert_eq!(store.search("food").len(), 1);
    assert_eq!(store.search("PHOTOSYNTHESIS").len(), 1);
    assert_eq!(store.search("circle").len(), 1);
    assert!(store.search("gravity").is_empty());
}

#[test]
fn test_delete_current_moves_pointer_to_first_remaining() {
    let (_, mut store) = memory_store();
    let older = store.create_thread(&Subject::Math, None);
    let newer = store.create_thread(&Subject::Science, None);
    assert_eq!(store.current_thread_id(), Some(newer.as_str()));

    store.delete_thread(&newer).unwrap();
    assert_eq!(store.current_thread_id(), Some(older.as_str()));

    store.delete_thread(&older).unwrap();
    assert_eq!(store.current_thread_id(), None);
    assert!(store.is_empty());
}

#[test]
fn test_delete_non_current_keeps_pointer() {
    let (_, mut store) = memory_store();
    let older = store.create_thread(&Subject::Math, None);
    let newer = store.create_thread(&Subject::Science, None);

    store.delete_thread(&older).unwrap();
    assert_eq!(store.current_thread_id(), Some(newer.as_str()));
    assert!(store.delete_thread("nope").is_err());
}

#[test]
fn test_export_import_round_trip() {
    let (_, mut store) = memory_store();
    store.add_message("what is a verb?", "An action word.", &Subject::English, MessageMetadata::default());
    store.create_thread(&Subject::Reasoning, Some("Logic drills"));
    store.add_message(
        "deductive reasoning",
        "General to specific.",
        &Subject::Reasoning,
        MessageMetadata {
            confidence: 0.9,
            difficulty: Difficulty::Advanced,
            read_time: 2,
            sources: vec!["Logic books".to_string()],
            key_insights: vec!["Syllogisms".to_string()],
        },
    );

    let before: Vec<_> = store.threads().into_iter().cloned().collect();
    let exported = store.export_all().unwrap();

    let (_, mut other) = memory_store();
    assert!(other.import_all(&exported));
    let after: Vec<_> = other.threads().into_iter().cloned().collect();

    assert_eq!(before, after);
    assert!(other.current_thread().is_some());
}

#[test]
fn test_export_import_keeps_confidence_bits() {
    let (_, mut store) = memory_store();
    for i in 1..600u32 {
        let metadata = MessageMetadata {
            confidence: f64::from(i) / 2003.0 + f64::from(i % 7) / 3.0e7,
            ..MessageMetadata::default()
        };
        store.add_message(&format!("q{}", i), "r", &Subject::Math, metadata);
    }

    let before: Vec<_> = store.threads().into_iter().cloned().collect();
    let exported = store.export_all().unwrap();

    let (_, mut other) = memory_store();
    assert!(other.import_all(&exported));
    let after: Vec<_> = other.threads().into_iter().cloned().collect();

    let mismatched = before[0]
        .messages
        .iter()
        .zip(&after[0].messages)
        .filter(|(a, b)| a.metadata.confidence.to_bits() != b.metadata.confidence.to_bits())
        .count();
    assert_eq!(mismatched, 0);
    assert_eq!(before, after);
}

#[test]
fn test_import_rejects_malformed_and_non_array_payloads() {
    let (_, mut store) = memory_store();
    store.add_message("q", "r", &Subject::Math, MessageMetadata::default());
    let before = store.export_all().unwrap();

    assert!(!store.import_all("{not valid"));
    assert!(!store.import_all("{\"threads\": []}"));
    assert!(!store.import_all("[{\"id\": 1}]"));

    assert_eq!(store.export_all().unwrap(), before);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_import_rejects_duplicate_ids() {
    let (_, mut store) = memory_store();
    store.create_thread(&Subject::Math, None);
    let exported = store.export_all().unwrap();
    let thread: serde_json::Value = serde_json::from_str::<serde_json::Value>(&exported).unwrap()[0].clone();
    let doubled = serde_json::Value::Array(vec![thread.clone(), thread]).to_string();

    assert!(!store.import_all(&doubled));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_reopen_restores_threads_and_pointer() {
    let (backend, mut store) = memory_store();
    store.create_thread(&Subject::Math, None);
    let current = store.create_thread(&Subject::English, None);
    store.add_message("tenses", "past, present, future", &Subject::English, MessageMetadata::default());

    let reopened = ConversationStore::open(Arc::new(backend));
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.current_thread_id(), Some(current.as_str()));
    assert_eq!(reopened.current_thread().unwrap().messages.len(), 1);
}

#[test]
fn test_corrupt_storage_falls_back_to_empty() {
    let backend = MemoryStore::new();
    backend.set(CONVERSATIONS_KEY, "{{{ definitely not json").unwrap();

    let store = ConversationStore::open(Arc::new(backend));
    assert!(store.is_empty());
    assert_eq!(store.current_thread_id(), None);
}

#[test]
fn test_dangling_pointer_is_repaired_on_open() {
    let backend = MemoryStore::new();
    backend
        .set(CONVERSATIONS_KEY, r#"{"threads": [], "currentThreadId": "gone"}"#)
        .unwrap();

    let store = ConversationStore::open(Arc::new(backend));
    assert_eq!(store.current_thread_id(), None);
}

#[test]
fn test_file_store_persists_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    {
        let backend = FileStore::new(dir.path()).unwrap();
        let mut store = ConversationStore::open(Arc::new(backend));
        store.add_message("what is an atom?", "Smallest unit of an element.", &Subject::ScienceChemistry, MessageMetadata::default());
    }

    let backend = FileStore::new(dir.path()).unwrap();
    let raw = backend.get(CONVERSATIONS_KEY).unwrap().unwrap();
    assert!(raw.contains("\"currentThreadId\""));

    let store = ConversationStore::open(Arc::new(backend));
    assert_eq!(store.search("atom").len(), 1);
}

#[test]
fn test_clear_all() {
    let (backend, mut store) = memory_store();
    store.add_message("q", "r", &Subject::Math, MessageMetadata::default());
    store.clear_all();

    assert!(store.is_empty());
    assert!(ConversationStore::open(Arc::new(backend)).is_empty());
}
