use std::fmt::{self, Display};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Classification of a place; drives marker color and glyph.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Park,
    Museum,
    Food,
    Landmark,
    Shopping,
    Lodging,
    Other(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryStyle {
    pub color: &'static str,
    pub glyph: &'static str,
}

impl CategoryStyle {
    pub const DEFAULT: CategoryStyle = CategoryStyle {
        color: "#3b82f6",
        glyph: "📍",
    };
}

impl Category {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();

        match value.to_lowercase().as_str() {
            "park" => Self::Park,
            "museum" => Self::Museum,
            "food" => Self::Food,
            "landmark" => Self::Landmark,
            "shopping" => Self::Shopping,
            "lodging" => Self::Lodging,
            _ => Self::Other(value.to_string()),
        }
    }

    /// Maps provider place types (first match wins) onto a category.
    pub fn from_provider_types<S: AsRef<str>>(types: &[S]) -> Self {
        for t in types {
            let category = match t.as_ref() {
                "park" | "campground" | "natural_feature" => Self::Park,
                "museum" | "art_gallery" => Self::Museum,
                "restaurant" | "cafe" | "bakery" | "bar" | "food" | "meal_takeaway" => Self::Food,
                "tourist_attraction" | "church" | "city_hall" | "stadium" => Self::Landmark,
                "store" | "shopping_mall" | "clothing_store" | "department_store" => {
                    Self::Shopping
                }
                "lodging" => Self::Lodging,
                _ => continue,
            };

            return category;
        }

        match types.first() {
            Some(t) => Self::Other(t.as_ref().to_string()),
            None => Self::Landmark,
        }
    }

    /// Provider place type used as the nearby-search filter.
    pub fn provider_type(&self) -> Option<&str> {
        match self {
            Self::Park => Some("park"),
            Self::Museum => Some("museum"),
            Self::Food => Some("restaurant"),
            Self::Landmark => Some("tourist_attraction"),
            Self::Shopping => Some("store"),
            Self::Lodging => Some("lodging"),
            Self::Other(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Park => "Park",
            Self::Museum => "Museum",
            Self::Food => "Food",
            Self::Landmark => "Landmark",
            Self::Shopping => "Shopping",
            Self::Lodging => "Lodging",
            Self::Other(label) => label.as_str(),
        }
    }

    pub fn style(&self) -> CategoryStyle {
        match self {
            Self::Park => CategoryStyle {
                color: "#22c55e",
                glyph: "🌳",
            },
            Self::Museum => CategoryStyle {
                color: "#f59e0b",
                glyph: "🖼️",
            },
            Self::Food => CategoryStyle {
                color: "#ef4444",
                glyph: "🍕",
            },
            Self::Shopping => CategoryStyle {
                color: "#ec4899",
                glyph: "🛍️",
            },
            Self::Lodging => CategoryStyle {
                color: "#8b5cf6",
                glyph: "🛏️",
            },
            Self::Landmark | Self::Other(_) => CategoryStyle::DEFAULT,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Category::parse(&value))
    }
}

#[test]
fn parse_is_case_insensitive_and_keeps_unknown_labels() {
    assert_eq!(Category::parse("museum"), Category::Museum);
    assert_eq!(Category::parse(" PARK "), Category::Park);
    assert_eq!(
        Category::parse("Aquarium"),
        Category::Other("Aquarium".into())
    );
    assert_eq!(Category::parse("Aquarium").label(), "Aquarium");
}

#[test]
fn unknown_categories_use_landmark_style() {
    assert_eq!(
        Category::Other("Zoo".into()).style(),
        Category::Landmark.style()
    );
    assert_ne!(Category::Park.style(), CategoryStyle::DEFAULT);
}

#[test]
fn provider_types_map_to_first_known_category() {
    let types = vec!["point_of_interest", "cafe", "establishment"];
    assert_eq!(Category::from_provider_types(&types), Category::Food);

    let types = vec!["aquarium", "establishment"];
    assert_eq!(
        Category::from_provider_types(&types),
        Category::Other("aquarium".into())
    );

    let empty: Vec<String> = vec![];
    assert_eq!(Category::from_provider_types(&empty), Category::Landmark);
}

#[test]
fn serializes_as_label() {
    let json = serde_json::to_string(&Category::Museum).unwrap();
    assert_eq!(json, "\"Museum\"");

    let category: Category = serde_json::from_str("\"food\"").unwrap();
    assert_eq!(category, Category::Food);
}
