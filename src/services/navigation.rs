//! Category navigation: remember the dataset a view should load, then hand
//! back the route to show it under.

use crate::models::category::Category;
use crate::models::settings::AppSettings;
use crate::storage::{endpoint, KeyValueStore};

/// Store the endpoint for `category` and return its route.
pub fn explore(
    store: &dyn KeyValueStore,
    settings: &AppSettings,
    category: Category,
) -> crate::error::Result<&'static str> {
    let url = category.endpoint(&settings.api_base_url);
    endpoint::set_current_endpoint(store, &url)?;
    log::info!("Navigating to {} ({})", category.route(), url);
    Ok(category.route())
}
