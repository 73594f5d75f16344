use crate::{
    api::{NearbyRequest, PlacesGateway},
    config::Config,
    engine::classify::is_location_query,
    entities::{CategoryFilter, LocationResult, Place, SearchOutcome, SearchState},
};

const DEFAULT_PLACE_TYPE: &str = "tourist_attraction";

/// Two-path dispatch: geocode location-like queries and search around the
/// result, otherwise (or if geocoding yields nothing) run a keyword search.
#[tracing::instrument(skip(gateway, config))]
pub async fn search(
    gateway: &(dyn PlacesGateway + Send + Sync),
    config: &Config,
    query: &str,
    category: &CategoryFilter,
) -> SearchOutcome {
    let query = query.trim();
    let place_type = match category {
        CategoryFilter::All => None,
        CategoryFilter::Only(c) => c.provider_type().map(String::from),
    };

    if is_location_query(query) {
        match gateway.geocode(query).await {
            Ok(Some(location)) => {
                tracing::info!("resolved {:?} to {}", query, location.description);

                let request = NearbyRequest {
                    center: location.coordinates,
                    radius: config.search_radius,
                    keyword: None,
                    place_type: place_type.or_else(|| Some(DEFAULT_PLACE_TYPE.into())),
                    limit: config.max_results,
                };

                let results = nearby(gateway, request).await;
                return outcome(query, category, results, Some(location));
            }
            Ok(None) => tracing::info!("no location for {:?}, using keyword search", query),
            Err(err) => tracing::warn!("geocoding failed: {}, using keyword search", err),
        }
    }

    let request = NearbyRequest {
        center: config.default_center,
        radius: config.search_radius,
        keyword: Some(query.to_string()),
        place_type,
        limit: config.max_results,
    };

    let results = nearby(gateway, request).await;
    outcome(query, category, results, None)
}

async fn nearby(gateway: &(dyn PlacesGateway + Send + Sync), request: NearbyRequest) -> Vec<Place> {
    let limit = request.limit;

    match gateway.nearby_search(request).await {
        Ok(mut places) => {
            places.truncate(limit);
            places
        }
        Err(err) => {
            tracing::warn!("nearby search failed: {}", err);
            vec![]
        }
    }
}

fn outcome(
    query: &str,
    category: &CategoryFilter,
    results: Vec<Place>,
    resolved: Option<LocationResult>,
) -> SearchOutcome {
    SearchOutcome {
        state: SearchState {
            query: query.to_string(),
            category: category.clone(),
            results,
        },
        resolved,
    }
}
