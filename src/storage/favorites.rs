//! Favorite countries, persisted as a JSON array of codes.

use crate::models::CountryCode;
use crate::storage::KeyValueStore;

const FAVORITES_KEY: &str = "favoriteCountries";

/// Read the favorites list. Returns an empty list if nothing was saved yet.
///
/// A stored value that is not a JSON array of strings is an error; it is not
/// reset.
pub fn get_favorite_countries(store: &dyn KeyValueStore) -> crate::error::Result<Vec<CountryCode>> {
    match store.get(FAVORITES_KEY)? {
        Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(&raw)?),
        _ => Ok(Vec::new()),
    }
}

/// Add `code` if absent, remove every occurrence if present, persist and
/// return the new list.
pub fn toggle_favorite_country(
    store: &dyn KeyValueStore,
    code: &str,
) -> crate::error::Result<Vec<CountryCode>> {
    let current = get_favorite_countries(store)?;
    let updated = toggled(current, code);
    store.set(FAVORITES_KEY, &serde_json::to_string(&updated)?)?;
    log::debug!("Favorites now {:?}", updated);
    Ok(updated)
}

pub fn is_favorite(store: &dyn KeyValueStore, code: &str) -> crate::error::Result<bool> {
    Ok(get_favorite_countries(store)?.iter().any(|c| c == code))
}

fn toggled(mut list: Vec<CountryCode>, code: &str) -> Vec<CountryCode> {
    if list.iter().any(|c| c == code) {
        list.retain(|c| c != code);
    } else {
        list.push(code.to_string());
    }
    list
}
