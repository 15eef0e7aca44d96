//! Command handlers.
//!
//! Entry points a front end calls. Handlers take the shared [`AppState`],
//! forward to the `storage` and `services` layers and flatten errors to
//! strings at the boundary. Commands should not contain business logic.

use std::sync::Arc;

use crate::storage::KeyValueStore;

pub mod favorites;
pub mod home;
pub mod navigation;
pub mod settings;

/// State shared by every command.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    AppState::new(Arc::new(crate::storage::MemoryStore::new()))
}
