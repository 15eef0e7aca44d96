use crate::models::settings::AppSettings;
use crate::storage::KeyValueStore;

const SETTINGS_KEY: &str = "settings";

/// Read application settings. Returns defaults if none are saved or the
/// saved value cannot be parsed.
pub fn get_settings(store: &dyn KeyValueStore) -> crate::error::Result<AppSettings> {
    let settings: AppSettings = store
        .get(SETTINGS_KEY)?
        .and_then(|raw| match serde_json::from_str(&raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                None
            }
        })
        .unwrap_or_default();
    Ok(settings)
}

/// Save application settings. Persists immediately.
pub fn save_settings(store: &dyn KeyValueStore, settings: &AppSettings) -> crate::error::Result<()> {
    store.set(SETTINGS_KEY, &serde_json::to_string(settings)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn missing_value_returns_default() {
        let settings = get_settings(&MemoryStore::new()).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn saved_settings_are_read_back() {
        let store = MemoryStore::new();
        let custom = AppSettings {
            slide_interval_ms: 1500,
            api_base_url: "http://localhost:8080/v3.1".to_string(),
        };
        save_settings(&store, &custom).unwrap();
        assert_eq!(get_settings(&store).unwrap(), custom);
    }

    #[test]
    fn corrupt_value_falls_back_to_default() {
        let store = MemoryStore::with_entries([(SETTINGS_KEY, "nope")]);
        assert_eq!(get_settings(&store).unwrap(), AppSettings::default());
    }
}
