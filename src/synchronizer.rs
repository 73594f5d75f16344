use std::collections::{HashMap, HashSet};

use crate::{
    api::{MapSurface, MarkerHandle, MarkerOptions},
    config::Config,
    entities::{Bounds, Coordinates, LocationResult, Place},
    render::popup_html,
};

/// Keeps exactly one marker per place in the current result set.
///
/// Owns every marker handle it creates; nothing else adds or removes markers
/// on the surface.
pub struct MarkerSynchronizer<M: MapSurface> {
    surface: M,
    markers: HashMap<String, MarkerHandle>,
    detail_zoom: u8,
    fit_padding: u32,
    default_center: Coordinates,
    default_zoom: u8,
}

impl<M: MapSurface> MarkerSynchronizer<M> {
    pub fn new(surface: M, config: &Config) -> Self {
        Self {
            surface,
            markers: HashMap::new(),
            detail_zoom: config.detail_zoom,
            fit_padding: config.fit_padding,
            default_center: config.default_center,
            default_zoom: config.default_zoom,
        }
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn has_marker(&self, place_id: &str) -> bool {
        self.markers.contains_key(place_id)
    }

    /// Removes markers for places not in `places` and adds the missing ones.
    #[tracing::instrument(skip_all, fields(count = places.len()))]
    pub async fn sync(&mut self, places: &[Place]) {
        let wanted: HashSet<&str> = places.iter().map(|p| p.id.as_str()).collect();

        let stale: Vec<String> = self
            .markers
            .keys()
            .filter(|id| !wanted.contains(id.as_str()))
            .cloned()
            .collect();

        for id in stale {
            if let Some(handle) = self.markers.remove(&id) {
                self.surface.remove_marker(handle).await;
            }
        }

        for place in places {
            if self.markers.contains_key(&place.id) {
                continue;
            }

            let handle = self
                .surface
                .add_marker(place.coordinates, MarkerOptions::for_place(place))
                .await;
            self.markers.insert(place.id.clone(), handle);
        }
    }

    /// Pans to the place, raising zoom to the detail level if needed, then
    /// opens its popup. Returns false if the place has no marker.
    #[tracing::instrument(skip_all, fields(place = %place.id))]
    pub async fn focus(&mut self, place: &Place) -> bool {
        let handle = match self.markers.get(&place.id) {
            Some(handle) => handle,
            None => return false,
        };

        if self.surface.zoom() < self.detail_zoom {
            self.surface.set_zoom(self.detail_zoom).await;
        }

        self.surface.pan_to(place.coordinates).await;
        self.surface.open_popup(handle, popup_html(place)).await;

        true
    }

    /// Viewport policy after a search: bound many, focus one, leave zero alone.
    pub async fn fit_results(&mut self, places: &[Place]) {
        match places {
            [] => {}
            [place] => {
                self.focus(place).await;
            }
            _ => self.fit(places).await,
        }
    }

    /// Initial or post-clear viewport.
    pub async fn reset_view(&mut self, places: &[Place]) {
        if places.is_empty() {
            self.surface.set_zoom(self.default_zoom).await;
            self.surface.pan_to(self.default_center).await;
        } else {
            self.fit(places).await;
        }
    }

    pub async fn show_location(&mut self, location: &LocationResult) {
        self.surface.set_zoom(location.kind.zoom()).await;
        self.surface.pan_to(location.coordinates).await;
    }

    async fn fit(&mut self, places: &[Place]) {
        if let Some(bounds) = Bounds::around(places.iter().map(|p| &p.coordinates)) {
            self.surface.fit_bounds(bounds, self.fit_padding).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::testing::{MapCommand, RecordingMap};

    fn synchronizer(zoom: u8) -> MarkerSynchronizer<RecordingMap> {
        MarkerSynchronizer::new(RecordingMap::new(zoom), &Config::default())
    }

    #[tokio::test]
    async fn sync_adds_and_removes_to_match_results() {
        let mut sync = synchronizer(12);
        let places = Catalog::sample().places().to_vec();

        sync.sync(&places).await;
        assert_eq!(sync.marker_count(), 6);

        sync.sync(&places[..2]).await;
        assert_eq!(sync.marker_count(), 2);
        assert!(sync.has_marker("central-park"));
        assert!(sync.has_marker("moma"));
        assert!(!sync.has_marker("hyde-park"));

        let removed = sync
            .surface()
            .commands()
            .iter()
            .filter(|c| matches!(c, MapCommand::RemoveMarker { .. }))
            .count();
        assert_eq!(removed, 4);
    }

    #[tokio::test]
    async fn sync_is_idempotent() {
        let mut sync = synchronizer(12);
        let places = Catalog::sample().places()[1..4].to_vec();

        sync.sync(&places).await;
        sync.surface().clear_log();

        sync.sync(&places).await;
        assert!(sync.surface().commands().is_empty());
        assert_eq!(sync.marker_count(), 3);
    }

    #[tokio::test]
    async fn focus_raises_zoom_and_opens_popup_after_pan() {
        let mut sync = synchronizer(10);
        let place = Catalog::sample().places()[0].clone();

        sync.sync(std::slice::from_ref(&place)).await;
        sync.surface().clear_log();

        assert!(sync.focus(&place).await);
        assert_eq!(
            sync.surface().commands(),
            vec![
                MapCommand::SetZoom(14),
                MapCommand::PanTo(place.coordinates),
                MapCommand::OpenPopup { id: 1 },
            ]
        );
    }

    #[tokio::test]
    async fn focus_never_lowers_zoom() {
        let mut sync = synchronizer(17);
        let place = Catalog::sample().places()[0].clone();

        sync.sync(std::slice::from_ref(&place)).await;
        sync.surface().clear_log();
        sync.focus(&place).await;

        assert!(!sync
            .surface()
            .commands()
            .iter()
            .any(|c| matches!(c, MapCommand::SetZoom(_))));
    }

    #[tokio::test]
    async fn focus_without_marker_does_nothing() {
        let mut sync = synchronizer(12);
        let place = Catalog::sample().places()[0].clone();

        assert!(!sync.focus(&place).await);
        assert!(sync.surface().commands().is_empty());
    }

    #[tokio::test]
    async fn viewport_policy_by_result_count() {
        let mut sync = synchronizer(12);
        let places = Catalog::sample().places().to_vec();
        sync.sync(&places).await;

        sync.surface().clear_log();
        sync.fit_results(&[]).await;
        assert!(sync.surface().commands().is_empty());

        sync.fit_results(&places[..1]).await;
        assert!(sync
            .surface()
            .commands()
            .iter()
            .any(|c| matches!(c, MapCommand::OpenPopup { .. })));

        sync.surface().clear_log();
        sync.fit_results(&places).await;
        let expected = Bounds::around(places.iter().map(|p| &p.coordinates)).unwrap();
        assert_eq!(sync.surface().commands(), vec![MapCommand::FitBounds(expected)]);
    }

    #[tokio::test]
    async fn reset_view_without_places_uses_default_view() {
        let mut sync = synchronizer(3);
        sync.reset_view(&[]).await;

        let config = Config::default();
        assert_eq!(
            sync.surface().commands(),
            vec![
                MapCommand::SetZoom(config.default_zoom),
                MapCommand::PanTo(config.default_center),
            ]
        );
    }
}
