use crate::entities::{CategoryFilter, Place};

pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// `query` must already be normalized.
pub fn matches(place: &Place, query: &str, category: &CategoryFilter) -> bool {
    if !category.admits(&place.category) {
        return false;
    }

    if query.is_empty() {
        return true;
    }

    normalize(&place.name).contains(query)
        || normalize(&place.description).contains(query)
        || normalize(place.category.label()).contains(query)
}

/// Stable filter: matches keep their relative order from `places`.
pub fn filter(places: &[Place], query: &str, category: &CategoryFilter) -> Vec<Place> {
    let query = normalize(query);

    places
        .iter()
        .filter(|place| matches(place, &query, category))
        .cloned()
        .collect()
}
