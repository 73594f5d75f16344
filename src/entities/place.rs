use serde::{Deserialize, Serialize};

use crate::entities::{Category, Coordinates};

pub const PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/600x400?text=No+image";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub coordinates: Coordinates,
    pub category: Category,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Place {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        coordinates: Coordinates,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            coordinates,
            category,
            image: None,
            rating: None,
            price_level: None,
            address: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn image_or_placeholder(&self) -> &str {
        match &self.image {
            Some(image) if !image.is_empty() => image.as_str(),
            _ => PLACEHOLDER_IMAGE,
        }
    }
}

#[test]
fn missing_image_falls_back_to_placeholder() {
    let coordinates = Coordinates { lat: 40.7, lng: -74.0 };

    let place = Place::new("a", "A", "", coordinates, Category::Park);
    assert_eq!(place.image_or_placeholder(), PLACEHOLDER_IMAGE);

    let place = place.with_image("");
    assert_eq!(place.image_or_placeholder(), PLACEHOLDER_IMAGE);

    let place = place.with_image("https://example.com/a.jpg");
    assert_eq!(place.image_or_placeholder(), "https://example.com/a.jpg");
}
