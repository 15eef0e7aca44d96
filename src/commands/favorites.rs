use crate::commands::AppState;
use crate::models::CountryCode;
use crate::storage::favorites;

pub fn get_favorites(state: &AppState) -> Result<Vec<CountryCode>, String> {
    favorites::get_favorite_countries(state.store.as_ref()).map_err(|e| e.to_string())
}

pub fn toggle_favorite(code: &str, state: &AppState) -> Result<Vec<CountryCode>, String> {
    favorites::toggle_favorite_country(state.store.as_ref(), code).map_err(|e| e.to_string())
}

pub fn check_favorite(code: &str, state: &AppState) -> Result<bool, String> {
    favorites::is_favorite(state.store.as_ref(), code).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_state;

    #[test]
    fn toggle_then_check() {
        let state = test_state();
        assert_eq!(toggle_favorite("US", &state).unwrap(), vec!["US"]);
        assert!(check_favorite("US", &state).unwrap());
        assert_eq!(get_favorites(&state).unwrap(), vec!["US"]);
    }

    #[test]
    fn corrupt_store_surfaces_message() {
        let state = test_state();
        state.store.set("favoriteCountries", "oops").unwrap();
        let err = get_favorites(&state).unwrap_err();
        assert!(err.starts_with("serialization error"), "got: {}", err);
    }
}
