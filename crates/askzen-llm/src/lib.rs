pub mod completions;
pub mod config;
pub mod traits;
pub mod types;

pub use traits::{ChatClient, ChatOptions, ChatRequest, ChatResponse, TokenUsage};

pub use completions::CompletionClient;
pub use config::{ClientFactory, ProviderConfig, ProviderType};
pub use types::Message;
