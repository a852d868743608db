mod message;
mod note;
mod thread;

pub use message::{ConversationMessage, MessageMetadata};
pub use note::Note;
pub use thread::ConversationThread;
