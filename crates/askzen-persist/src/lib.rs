pub mod conversation;
pub mod error;
pub mod models;
pub mod notes;
pub mod storage;

pub use conversation::{export_file_name, ConversationStore, CONVERSATIONS_KEY};
pub use error::{PersistError, Result};
pub use models::{ConversationMessage, ConversationThread, MessageMetadata, Note};
pub use notes::{NoteStore, NOTES_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
