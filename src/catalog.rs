use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use crate::entities::{Category, Coordinates, Place};
use crate::error::{duplicate_place_error, Error};

/// Immutable, ordered list of places with unique ids.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    places: Vec<Place>,
}

/// On-disk record. `id` is optional; missing ids are assigned at load time.
#[derive(Deserialize)]
struct CatalogRecord {
    id: Option<String>,
    name: String,
    #[serde(default)]
    description: String,
    lat: f64,
    lng: f64,
    category: Category,
    image: Option<String>,
}

impl Catalog {
    pub fn new(places: Vec<Place>) -> Result<Self, Error> {
        let mut seen = HashSet::new();

        for place in places.iter() {
            if !seen.insert(place.id.as_str()) {
                return Err(duplicate_place_error(&place.id));
            }
        }

        Ok(Self { places })
    }

    #[tracing::instrument]
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let records: Vec<CatalogRecord> = serde_json::from_reader(reader)?;

        let catalog = Self::from_records(records)?;

        tracing::info!("loaded {} places from catalog", catalog.len());

        Ok(catalog)
    }

    pub fn from_json_str(data: &str) -> Result<Self, Error> {
        let records: Vec<CatalogRecord> = serde_json::from_str(data)?;
        Self::from_records(records)
    }

    fn from_records(records: Vec<CatalogRecord>) -> Result<Self, Error> {
        let mut places = Vec::with_capacity(records.len());

        for record in records {
            let coordinates = Coordinates::new(record.lat, record.lng)?;
            let id = record.id.unwrap_or_else(|| Uuid::new_v4().to_string());

            let mut place = Place::new(
                id,
                record.name,
                record.description,
                coordinates,
                record.category,
            );
            place.image = record.image;

            places.push(place);
        }

        Self::new(places)
    }

    /// Built-in demo set.
    pub fn sample() -> Self {
        let places = vec![
            sample_place(
                "central-park",
                "Central Park",
                "Iconic urban park in the heart of Manhattan.",
                (40.7829, -73.9654),
                Category::Park,
                "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=600&q=60&auto=format&fit=crop",
            ),
            sample_place(
                "moma",
                "Museum of Modern Art",
                "World-class collection of modern and contemporary art.",
                (40.7614, -73.9776),
                Category::Museum,
                "https://images.unsplash.com/photo-1544207240-7194b3e76e6a?w=600&q=60&auto=format&fit=crop",
            ),
            sample_place(
                "joes-pizza",
                "Joe's Pizza",
                "Famous NYC slice joint loved by locals and tourists.",
                (40.7306, -73.9995),
                Category::Food,
                "https://images.unsplash.com/photo-1541745537413-b8048e8f1c36?w=600&q=60&auto=format&fit=crop",
            ),
            sample_place(
                "brooklyn-bridge",
                "Brooklyn Bridge",
                "Historic suspension bridge linking Manhattan and Brooklyn.",
                (40.7061, -73.9969),
                Category::Landmark,
                "https://images.unsplash.com/photo-1468436139062-f60a71c5c892?w=600&q=60&auto=format&fit=crop",
            ),
            sample_place(
                "golden-gate",
                "Golden Gate Bridge",
                "San Francisco's iconic red-orange suspension bridge.",
                (37.8199, -122.4783),
                Category::Landmark,
                "https://images.unsplash.com/photo-1501594907352-04cda38ebc29?w=600&q=60&auto=format&fit=crop",
            ),
            sample_place(
                "hyde-park",
                "Hyde Park",
                "One of London's largest Royal Parks.",
                (51.507268, -0.16573),
                Category::Park,
                "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=600&q=60&auto=format&fit=crop",
            ),
        ];

        Self { places }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    /// Distinct categories in first-seen order, for populating a selector.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = vec![];

        for place in self.places.iter() {
            if !categories.contains(&place.category) {
                categories.push(place.category.clone());
            }
        }

        categories
    }
}

fn sample_place(
    id: &str,
    name: &str,
    description: &str,
    (lat, lng): (f64, f64),
    category: Category,
    image: &str,
) -> Place {
    Place::new(id, name, description, Coordinates { lat, lng }, category).with_image(image)
}
