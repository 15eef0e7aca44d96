//! Local persistence layer.
//!
//! Everything the explorer remembers lives in a string key-value store,
//! mirroring browser local storage: favorites, the selected API endpoint and
//! settings. The store is injected through [`KeyValueStore`] so callers can
//! run against [`MemoryStore`] in tests and [`JsonFileStore`] on disk.

pub mod endpoint;
pub mod favorites;
pub mod file;
pub mod memory;
pub mod settings;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Synchronous string key-value storage.
///
/// Writes must be durable by the time `set` or `remove` returns.
pub trait KeyValueStore: Send + Sync {
    /// Read the value at `key`, `None` if it was never written.
    fn get(&self, key: &str) -> crate::error::Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> crate::error::Result<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> crate::error::Result<()>;
}
