use crate::commands::AppState;
use crate::models::category::Category;
use crate::services::navigation;
use crate::storage::{endpoint, settings};

/// Select `category`; returns the route to navigate to.
pub fn explore_category(category: Category, state: &AppState) -> Result<String, String> {
    let store = state.store.as_ref();
    let settings = settings::get_settings(store).map_err(|e| e.to_string())?;
    navigation::explore(store, &settings, category)
        .map(str::to_string)
        .map_err(|e| e.to_string())
}

pub fn current_endpoint(state: &AppState) -> Result<Option<String>, String> {
    endpoint::get_current_endpoint(state.store.as_ref()).map_err(|e| e.to_string())
}
