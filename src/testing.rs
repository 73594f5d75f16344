//! Test doubles for the map surface, the places gateway and the results view.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    api::{MapSurface, MarkerHandle, MarkerOptions, NearbyRequest, PlacesGateway, ResultsView},
    entities::{Bounds, Category, Coordinates, LocationResult, Place},
    error::Error,
    presenter::PanelView,
};

pub fn place_at(id: &str, lat: f64, lng: f64) -> Place {
    Place::new(id, id, "", Coordinates { lat, lng }, Category::Landmark)
}

#[derive(Clone, Debug, PartialEq)]
pub enum MapCommand {
    AddMarker { id: u64, title: String },
    RemoveMarker { id: u64 },
    PanTo(Coordinates),
    SetZoom(u8),
    FitBounds(Bounds),
    OpenPopup { id: u64 },
}

/// Records every command; clones share the same log.
#[derive(Clone)]
pub struct RecordingMap {
    log: Arc<Mutex<Vec<MapCommand>>>,
    next_id: u64,
    zoom: u8,
}

impl RecordingMap {
    pub fn new(zoom: u8) -> Self {
        Self {
            log: Arc::new(Mutex::new(vec![])),
            next_id: 0,
            zoom,
        }
    }

    pub fn commands(&self) -> Vec<MapCommand> {
        self.log.lock().unwrap().clone()
    }

    pub fn clear_log(&self) {
        self.log.lock().unwrap().clear();
    }

    fn record(&self, command: MapCommand) {
        self.log.lock().unwrap().push(command);
    }
}

#[async_trait]
impl MapSurface for RecordingMap {
    async fn add_marker(&mut self, _: Coordinates, options: MarkerOptions) -> MarkerHandle {
        self.next_id += 1;
        self.record(MapCommand::AddMarker {
            id: self.next_id,
            title: options.title,
        });
        MarkerHandle::new(self.next_id)
    }

    async fn remove_marker(&mut self, marker: MarkerHandle) {
        self.record(MapCommand::RemoveMarker { id: marker.raw() });
    }

    async fn pan_to(&mut self, center: Coordinates) {
        self.record(MapCommand::PanTo(center));
    }

    async fn set_zoom(&mut self, zoom: u8) {
        self.zoom = zoom;
        self.record(MapCommand::SetZoom(zoom));
    }

    fn zoom(&self) -> u8 {
        self.zoom
    }

    async fn fit_bounds(&mut self, bounds: Bounds, _: u32) {
        self.record(MapCommand::FitBounds(bounds));
    }

    async fn open_popup(&mut self, marker: &MarkerHandle, _: String) {
        self.record(MapCommand::OpenPopup { id: marker.raw() });
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    Show(PanelView),
    Hide,
    ResetForm,
    Error(String),
}

#[derive(Clone, Default)]
pub struct RecordingView {
    log: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.log.lock().unwrap().clone()
    }

    pub fn last_panel(&self) -> Option<PanelView> {
        self.events().into_iter().rev().find_map(|e| match e {
            ViewEvent::Show(panel) => Some(panel),
            _ => None,
        })
    }
}

impl ResultsView for RecordingView {
    fn show(&mut self, panel: &PanelView) {
        self.log.lock().unwrap().push(ViewEvent::Show(panel.clone()));
    }

    fn hide(&mut self) {
        self.log.lock().unwrap().push(ViewEvent::Hide);
    }

    fn reset_form(&mut self) {
        self.log.lock().unwrap().push(ViewEvent::ResetForm);
    }

    fn show_error(&mut self, message: &str) {
        self.log.lock().unwrap().push(ViewEvent::Error(message.into()));
    }
}

/// Gateway returning canned answers and recording what it was asked.
pub struct StubGateway {
    location: Result<Option<LocationResult>, Error>,
    places: Result<Vec<Place>, Error>,
    geocoded: Mutex<Vec<String>>,
    requests: Mutex<Vec<NearbyRequest>>,
}

impl StubGateway {
    pub fn new() -> Self {
        Self {
            location: Ok(None),
            places: Ok(vec![]),
            geocoded: Mutex::new(vec![]),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn with_location(mut self, location: Result<Option<LocationResult>, Error>) -> Self {
        self.location = location;
        self
    }

    pub fn with_places(mut self, places: Result<Vec<Place>, Error>) -> Self {
        self.places = places;
        self
    }

    pub fn geocoded(&self) -> Vec<String> {
        self.geocoded.lock().unwrap().clone()
    }

    pub fn requests(&self) -> Vec<NearbyRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacesGateway for StubGateway {
    async fn geocode(&self, text: &str) -> Result<Option<LocationResult>, Error> {
        self.geocoded.lock().unwrap().push(text.to_string());
        self.location.clone()
    }

    async fn nearby_search(&self, request: NearbyRequest) -> Result<Vec<Place>, Error> {
        self.requests.lock().unwrap().push(request);
        self.places.clone()
    }
}
