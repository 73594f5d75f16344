use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::{Bounds, CategoryFilter, CategoryStyle, Coordinates, LocationResult, Place, SearchOutcome};
use crate::error::Error;
use crate::presenter::PanelView;

/// Opaque token for a marker living on a map surface.
///
/// Not `Clone`: the synchronizer is the only owner, and removing a marker
/// consumes its handle.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerOptions {
    pub title: String,
    pub style: CategoryStyle,
}

impl MarkerOptions {
    pub fn for_place(place: &Place) -> Self {
        Self {
            title: place.name.clone(),
            style: place.category.style(),
        }
    }
}

/// Command contract against an externally rendered map.
#[async_trait]
pub trait MapSurface: Send {
    async fn add_marker(&mut self, coordinates: Coordinates, options: MarkerOptions) -> MarkerHandle;
    async fn remove_marker(&mut self, marker: MarkerHandle);
    /// Resolves once the pan transition has completed.
    async fn pan_to(&mut self, center: Coordinates);
    async fn set_zoom(&mut self, zoom: u8);
    fn zoom(&self) -> u8;
    async fn fit_bounds(&mut self, bounds: Bounds, padding: u32);
    async fn open_popup(&mut self, marker: &MarkerHandle, html: String);
}

#[derive(Clone, Debug, PartialEq)]
pub struct NearbyRequest {
    pub center: Coordinates,
    pub radius: u32,
    pub keyword: Option<String>,
    pub place_type: Option<String>,
    pub limit: usize,
}

/// Geocoding and nearby search. `Ok(None)` / empty vec are "no result", not errors.
#[async_trait]
pub trait PlacesGateway {
    async fn geocode(&self, text: &str) -> Result<Option<LocationResult>, Error>;
    async fn nearby_search(&self, request: NearbyRequest) -> Result<Vec<Place>, Error>;
}

pub type DynGateway = Arc<dyn PlacesGateway + Send + Sync>;

/// The list panel and search form, as seen by the event wiring.
pub trait ResultsView: Send {
    fn show(&mut self, panel: &PanelView);
    fn hide(&mut self);
    fn reset_form(&mut self);
    fn show_error(&mut self, message: &str);
}

#[async_trait]
pub trait SearchAPI {
    /// Whether `query` is worth dispatching at all.
    fn accepts(&self, query: &str) -> bool;

    /// Places shown before any search and after a clear.
    fn initial_places(&self) -> Vec<Place>;

    async fn search(&self, query: String, category: CategoryFilter) -> SearchOutcome;
}

pub type DynAPI = Arc<dyn SearchAPI + Send + Sync>;
