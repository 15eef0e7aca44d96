use crate::commands::AppState;
use crate::models::settings::AppSettings;
use crate::storage::settings;

pub fn get_settings(state: &AppState) -> Result<AppSettings, String> {
    settings::get_settings(state.store.as_ref()).map_err(|e| e.to_string())
}

pub fn save_settings(settings_data: AppSettings, state: &AppState) -> Result<(), String> {
    if settings_data.api_base_url.trim().is_empty() {
        return Err("apiBaseUrl must not be empty".to_string());
    }
    settings::save_settings(state.store.as_ref(), &settings_data).map_err(|e| e.to_string())
}
