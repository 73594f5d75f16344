use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    api::{NearbyRequest, PlacesGateway},
    entities::{Category, Coordinates, LocationKind, LocationResult, Place},
    error::{invalid_input_error, upstream_error, Error},
};

const GENERIC_TYPES: [&str; 2] = ["point_of_interest", "establishment"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Photo {
    pub photo_reference: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NearbyResult {
    pub place_id: String,
    pub name: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub types: Vec<String>,
    pub vicinity: Option<String>,
    pub rating: Option<f32>,
    pub price_level: Option<u8>,
    pub photos: Option<Vec<Photo>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
}

/// Geocoding and nearby search against the Google Maps web services.
#[derive(Clone)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    key: String,
}

impl GoogleMaps {
    pub fn new(api_base: &str, key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.to_string(),
            key: key.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("https://{}/maps/api/{}", self.api_base, path)
    }

    fn photo_url(&self, photo_reference: &str) -> String {
        format!(
            "{}?maxwidth=600&photo_reference={}&key={}",
            self.url("place/photo"),
            photo_reference,
            self.key
        )
    }

    async fn fetch<T>(&self, request: reqwest::RequestBuilder) -> Result<Response<T>, Error>
    where
        T: for<'de> Deserialize<'de>,
    {
        let res = request.query(&[("key", &self.key)]).send().await?;

        let status_code = res.status().as_u16();

        if (400..500).contains(&status_code) {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        Ok(res.json().await?)
    }

    fn into_place(&self, result: NearbyResult) -> Place {
        let description = result
            .types
            .iter()
            .filter(|t| !GENERIC_TYPES.contains(&t.as_str()))
            .map(|t| t.replace('_', " "))
            .collect::<Vec<_>>()
            .join(", ");

        let image = result
            .photos
            .as_ref()
            .and_then(|photos| photos.first())
            .map(|photo| self.photo_url(&photo.photo_reference));

        Place {
            id: result.place_id,
            name: result.name,
            description,
            coordinates: result.geometry.location,
            category: Category::from_provider_types(&result.types),
            image,
            rating: result.rating,
            price_level: result.price_level,
            address: result.vicinity,
        }
    }

    fn parse_nearby(&self, data: Response<Vec<NearbyResult>>, limit: usize) -> Result<Vec<Place>, Error> {
        match data.status.as_str() {
            "OK" => Ok(data
                .results
                .ok_or_else(|| upstream_error())?
                .into_iter()
                .take(limit)
                .map(|result| self.into_place(result))
                .collect()),
            "ZERO_RESULTS" => Ok(vec![]),
            _ => Err(upstream_error()),
        }
    }
}

fn parse_geocode(data: Response<Vec<GeocodeResult>>) -> Result<Option<LocationResult>, Error> {
    match data.status.as_str() {
        "OK" => {
            let result = match data.results.and_then(|r| r.into_iter().next()) {
                Some(result) => result,
                None => return Ok(None),
            };

            // "political" and similar tags carry no granularity; skip past them.
            let kind = result
                .types
                .iter()
                .map(|t| LocationKind::from_provider_type(t))
                .find(|kind| *kind != LocationKind::Other)
                .unwrap_or(LocationKind::Other);

            Ok(Some(LocationResult::new(
                result.formatted_address,
                result.geometry.location,
                kind,
            )))
        }
        "ZERO_RESULTS" => Ok(None),
        _ => Err(upstream_error()),
    }
}

#[async_trait]
impl PlacesGateway for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn geocode(&self, text: &str) -> Result<Option<LocationResult>, Error> {
        let request = self
            .client
            .get(self.url("geocode/json"))
            .query(&[("address", text)]);

        let data: Response<Vec<GeocodeResult>> = self.fetch(request).await?;

        parse_geocode(data)
    }

    #[tracing::instrument(skip(self))]
    async fn nearby_search(&self, request: NearbyRequest) -> Result<Vec<Place>, Error> {
        let location: String = request.center.into();

        let mut builder = self
            .client
            .get(self.url("place/nearbysearch/json"))
            .query(&[("location", location)])
            .query(&[("radius", request.radius)]);

        if let Some(keyword) = &request.keyword {
            builder = builder.query(&[("keyword", keyword)]);
        }
        if let Some(place_type) = &request.place_type {
            builder = builder.query(&[("type", place_type)]);
        }

        let data: Response<Vec<NearbyResult>> = self.fetch(builder).await?;

        let places = self.parse_nearby(data, request.limit)?;

        tracing::info!("nearby search returned {} places", places.len());

        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> GoogleMaps {
        GoogleMaps::new("maps.example.com", "test-key")
    }

    #[test]
    fn geocode_picks_first_result_and_its_kind() {
        let data: Response<Vec<GeocodeResult>> = serde_json::from_str(
            r#"{
                "status": "OK",
                "results": [{
                    "formatted_address": "France",
                    "geometry": {"location": {"lat": 46.2276, "lng": 2.2137}},
                    "types": ["country", "political"]
                }]
            }"#,
        )
        .unwrap();

        let location = parse_geocode(data).unwrap().unwrap();
        assert_eq!(location.description, "France");
        assert_eq!(location.kind, LocationKind::Country);
        assert_eq!(location.coordinates, Coordinates { lat: 46.2276, lng: 2.2137 });
    }

    #[test]
    fn geocode_kind_skips_untiered_types() {
        let data: Response<Vec<GeocodeResult>> = serde_json::from_str(
            r#"{
                "status": "OK",
                "results": [{
                    "formatted_address": "Brooklyn, NY, USA",
                    "geometry": {"location": {"lat": 40.6782, "lng": -73.9442}},
                    "types": ["political", "sublocality", "sublocality_level_1"]
                }]
            }"#,
        )
        .unwrap();

        let location = parse_geocode(data).unwrap().unwrap();
        assert_eq!(location.kind, LocationKind::Sublocality);
        assert_eq!(location.kind.zoom(), 13);
    }

    #[test]
    fn geocode_zero_results_is_none_and_other_statuses_fail() {
        let zero: Response<Vec<GeocodeResult>> =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS", "results": []}"#).unwrap();
        assert_eq!(parse_geocode(zero).unwrap(), None);

        let denied: Response<Vec<GeocodeResult>> =
            serde_json::from_str(r#"{"status": "REQUEST_DENIED"}"#).unwrap();
        assert_eq!(parse_geocode(denied).unwrap_err().code, 4);
    }

    #[test]
    fn nearby_results_are_normalized_and_capped() {
        let data: Response<Vec<NearbyResult>> = serde_json::from_str(
            r#"{
                "status": "OK",
                "results": [
                    {
                        "place_id": "abc",
                        "name": "Louvre Museum",
                        "geometry": {"location": {"lat": 48.8606, "lng": 2.3376}},
                        "types": ["museum", "tourist_attraction", "point_of_interest"],
                        "vicinity": "Rue de Rivoli, Paris",
                        "rating": 4.7,
                        "photos": [{"photo_reference": "ref1"}]
                    },
                    {
                        "place_id": "def",
                        "name": "Café de Flore",
                        "geometry": {"location": {"lat": 48.854, "lng": 2.3325}},
                        "types": ["cafe", "food"],
                        "price_level": 3
                    },
                    {
                        "place_id": "ghi",
                        "name": "Extra",
                        "geometry": {"location": {"lat": 48.85, "lng": 2.33}}
                    }
                ]
            }"#,
        )
        .unwrap();

        let places = gateway().parse_nearby(data, 2).unwrap();
        assert_eq!(places.len(), 2);

        let louvre = &places[0];
        assert_eq!(louvre.id, "abc");
        assert_eq!(louvre.category, Category::Museum);
        assert_eq!(louvre.description, "museum, tourist attraction");
        assert_eq!(louvre.address.as_deref(), Some("Rue de Rivoli, Paris"));
        assert_eq!(louvre.rating, Some(4.7));
        assert!(louvre
            .image
            .as_deref()
            .unwrap()
            .starts_with("https://maps.example.com/maps/api/place/photo?"));

        let cafe = &places[1];
        assert_eq!(cafe.category, Category::Food);
        assert_eq!(cafe.image, None);
        assert_eq!(cafe.rating, None);
        assert_eq!(cafe.price_level, Some(3));
    }

    #[test]
    fn nearby_zero_results_is_empty() {
        let data: Response<Vec<NearbyResult>> =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS", "results": []}"#).unwrap();
        assert!(gateway().parse_nearby(data, 20).unwrap().is_empty());

        let data: Response<Vec<NearbyResult>> =
            serde_json::from_str(r#"{"status": "OVER_QUERY_LIMIT"}"#).unwrap();
        assert!(gateway().parse_nearby(data, 20).is_err());
    }
}
