//! Static content of the landing page.

use serde::Serialize;

use crate::models::category::Category;

/// Hero images cycled by the slideshow, in display order.
pub const HERO_IMAGES: [&str; 6] = [
    "assets/country1.jpg",
    "assets/country7.jpg",
    "assets/country3.jpg",
    "assets/country4.jpeg",
    "assets/country5.jpeg",
    "assets/country6.jpeg",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalFact {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCard {
    pub category: Category,
    pub label: &'static str,
    pub image: &'static str,
    pub route: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// Everything the landing page shows apart from the live slideshow index.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub hero_images: Vec<&'static str>,
    pub facts: Vec<GlobalFact>,
    pub categories: Vec<CategoryCard>,
    pub features: Vec<Feature>,
}

fn category_image(category: Category) -> &'static str {
    match category {
        Category::All | Category::Region => "assets/flags.jpg",
        Category::Population => "assets/population.jpg",
        Category::Capitals => "assets/capital.jpg",
        Category::Languages => "assets/speaking.jpg",
    }
}

impl HomeContent {
    pub fn landing() -> Self {
        Self {
            title: "Explore Our World",
            subtitle: "Discover countries, cultures, and connections",
            tagline: "Learn about nations around the globe, their people, capitals and languages.",
            hero_images: HERO_IMAGES.to_vec(),
            facts: vec![
                GlobalFact { value: "195+", label: "Countries" },
                GlobalFact { value: "7,000+", label: "Languages" },
                GlobalFact { value: "5+", label: "Regions" },
                GlobalFact { value: "8+ Billion", label: "People" },
            ],
            categories: Category::FILTERS
                .iter()
                .map(|&category| CategoryCard {
                    category,
                    label: category.label(),
                    image: category_image(category),
                    route: category.route(),
                })
                .collect(),
            features: vec![
                Feature {
                    title: "Country Search",
                    description: "Find any country by name.",
                },
                Feature {
                    title: "Region Filters",
                    description: "Narrow the list down to a single region.",
                },
                Feature {
                    title: "Detailed Information",
                    description: "Population, capitals, languages and flags at a glance.",
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_text() {
        let home = HomeContent::landing();
        assert_eq!(home.title, "Explore Our World");
        assert_eq!(home.subtitle, "Discover countries, cultures, and connections");
        assert!(home.tagline.starts_with("Learn about nations around the globe"));
    }

    #[test]
    fn facts_in_order() {
        let values: Vec<&str> = HomeContent::landing().facts.iter().map(|f| f.value).collect();
        assert_eq!(values, vec!["195+", "7,000+", "5+", "8+ Billion"]);
    }

    #[test]
    fn category_cards_carry_routes() {
        let home = HomeContent::landing();
        assert_eq!(home.categories.len(), 4);
        assert_eq!(home.categories[0].label, "Population");
        assert_eq!(home.categories[0].route, "/filter/population");
        assert_eq!(home.categories[3].image, "assets/speaking.jpg");
    }

    #[test]
    fn features_listed() {
        let titles: Vec<&str> = HomeContent::landing().features.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec!["Country Search", "Region Filters", "Detailed Information"]
        );
    }

    #[test]
    fn serde_camel_case_keys() {
        let json = serde_json::to_value(HomeContent::landing()).unwrap();
        assert!(json.get("heroImages").is_some());
        assert!(json.get("hero_images").is_none());
        assert_eq!(json["categories"][1]["category"], "capitals");
    }
}
