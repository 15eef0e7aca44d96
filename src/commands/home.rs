use crate::models::home::HomeContent;

pub fn get_home_content() -> HomeContent {
    HomeContent::landing()
}
