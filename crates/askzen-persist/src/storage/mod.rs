mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// String key-value persistence, one JSON document per key
///
/// Calls are synchronous: a store writes through on every mutation.
pub trait KeyValueStore: Send + Sync {
    /// Read the document stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the document stored under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
