use geo_types::{coord, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::error::{invalid_coordinates_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, Error> {
        let coordinates = Self { lat, lng };

        if !coordinates.is_valid() {
            return Err(invalid_coordinates_error(lat, lng));
        }

        Ok(coordinates)
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.lat, coordinates.lng)
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.lng, coordinates.lat)
    }
}

/// Smallest rectangle enclosing a set of coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds(Rect<f64>);

impl Bounds {
    pub fn around<'a, I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinates>,
    {
        let mut iter = coordinates.into_iter();
        let first = iter.next()?;

        let (mut south, mut west, mut north, mut east) = (first.lat, first.lng, first.lat, first.lng);

        for c in iter {
            south = south.min(c.lat);
            north = north.max(c.lat);
            west = west.min(c.lng);
            east = east.max(c.lng);
        }

        Some(Self(Rect::new(
            coord! { x: west, y: south },
            coord! { x: east, y: north },
        )))
    }

    pub fn south_west(&self) -> Coordinates {
        let min = self.0.min();
        Coordinates {
            lat: min.y,
            lng: min.x,
        }
    }

    pub fn north_east(&self) -> Coordinates {
        let max = self.0.max();
        Coordinates {
            lat: max.y,
            lng: max.x,
        }
    }

    pub fn center(&self) -> Coordinates {
        let center = self.0.center();
        Coordinates {
            lat: center.y,
            lng: center.x,
        }
    }
}

/// Administrative granularity of a geocoded location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Country,
    AdministrativeArea,
    Locality,
    Sublocality,
    Neighborhood,
    Route,
    StreetAddress,
    Establishment,
    Other,
}

impl LocationKind {
    /// Maps a provider result type (e.g. `administrative_area_level_1`) to a kind.
    pub fn from_provider_type(value: &str) -> Self {
        match value {
            "country" => Self::Country,
            v if v.starts_with("administrative_area_level") => Self::AdministrativeArea,
            "locality" | "postal_town" | "colloquial_area" => Self::Locality,
            v if v.starts_with("sublocality") => Self::Sublocality,
            "neighborhood" => Self::Neighborhood,
            "route" => Self::Route,
            "street_address" | "premise" | "subpremise" | "postal_code" => Self::StreetAddress,
            "establishment" | "point_of_interest" => Self::Establishment,
            _ => Self::Other,
        }
    }

    pub fn zoom(&self) -> u8 {
        match self {
            Self::Country => 5,
            Self::AdministrativeArea => 7,
            Self::Locality => 11,
            Self::Sublocality => 13,
            Self::Neighborhood => 14,
            Self::Route => 15,
            Self::StreetAddress | Self::Establishment => 16,
            Self::Other => 12,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    pub description: String,
    pub coordinates: Coordinates,
    pub kind: LocationKind,
}

impl LocationResult {
    pub fn new(description: String, coordinates: Coordinates, kind: LocationKind) -> Self {
        Self {
            description,
            coordinates,
            kind,
        }
    }
}
