//! Browse categories offered on the landing page.

use serde::{Deserialize, Serialize};

/// A landing-page button that selects a dataset view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Full dataset, shown by "Explore Countries" and "View All Countries".
    All,
    Population,
    Capitals,
    Region,
    Languages,
}

impl Category {
    /// Buttons in the order the landing page shows them.
    pub const FILTERS: [Category; 4] = [
        Category::Population,
        Category::Capitals,
        Category::Region,
        Category::Languages,
    ];

    /// Route the list view is served under.
    pub fn route(self) -> &'static str {
        match self {
            Category::All => "/allCountry",
            Category::Population => "/filter/population",
            Category::Capitals => "/filter/capitals",
            Category::Region => "/filter/region",
            Category::Languages => "/filter/languages",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All Countries",
            Category::Population => "Population",
            Category::Capitals => "Capitals",
            Category::Region => "Region",
            Category::Languages => "Languages",
        }
    }

    /// Field projection requested from the API, `None` for the full record.
    pub fn fields(self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Population => Some("name,population,flags"),
            Category::Capitals => Some("name,capital,flags"),
            Category::Region => Some("name,region,subregion,flags"),
            Category::Languages => Some("name,languages,flags"),
        }
    }

    /// Endpoint URL for this category under `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn endpoint(self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self.fields() {
            Some(fields) => format!("{}/all?fields={}", base, fields),
            None => format!("{}/all", base),
        }
    }
}
