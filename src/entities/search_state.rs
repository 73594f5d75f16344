use serde::{Deserialize, Serialize};

use crate::entities::{Category, LocationResult, Place};

/// Category selector: the `"all"` sentinel or a single category.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();

        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Self::All;
        }

        Self::Only(Category::parse(value))
    }

    pub fn admits(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(Category::Other(wanted)) => match category {
                Category::Other(label) => label.eq_ignore_ascii_case(wanted),
                _ => false,
            },
            Self::Only(c) => c == category,
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("all"),
            Self::Only(category) => category.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(CategoryFilter::parse(&value))
    }
}

/// Result of one search cycle. Derived on every search, never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    pub category: CategoryFilter,
    pub results: Vec<Place>,
}

impl SearchState {
    pub fn find(&self, id: &str) -> Option<&Place> {
        self.results.iter().find(|p| p.id == id)
    }
}

/// What the engine hands back to the wiring layer for one search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchOutcome {
    pub state: SearchState,
    pub resolved: Option<LocationResult>,
}

#[test]
fn all_sentinel_parses_to_all() {
    assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
    assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
    assert_eq!(
        CategoryFilter::parse("Museum"),
        CategoryFilter::Only(Category::Museum)
    );
}

#[test]
fn only_admits_its_category() {
    let filter = CategoryFilter::Only(Category::Food);
    assert!(filter.admits(&Category::Food));
    assert!(!filter.admits(&Category::Park));
    assert!(CategoryFilter::All.admits(&Category::Other("Zoo".into())));
}

#[test]
fn unknown_category_labels_match_ignoring_case() {
    let filter = CategoryFilter::parse("Aquarium");
    assert!(filter.admits(&Category::Other("aquarium".into())));
    assert!(!filter.admits(&Category::Other("Zoo".into())));
    assert!(!filter.admits(&Category::Park));
}
