//! The API endpoint chosen on the landing page, read by the list views.

use crate::storage::KeyValueStore;

const ENDPOINT_KEY: &str = "currentApiEndpoint";

pub fn set_current_endpoint(store: &dyn KeyValueStore, url: &str) -> crate::error::Result<()> {
    store.set(ENDPOINT_KEY, url)
}

/// Last endpoint selected, `None` before any category was chosen.
pub fn get_current_endpoint(store: &dyn KeyValueStore) -> crate::error::Result<Option<String>> {
    store.get(ENDPOINT_KEY)
}
