//! Map surface and results view that stand in for a browser: the map logs its
//! commands through `tracing` and the panel prints to stdout.

use async_trait::async_trait;

use crate::{
    api::{MapSurface, MarkerHandle, MarkerOptions, ResultsView},
    app::UiEvent,
    entities::{Bounds, CategoryFilter, Coordinates},
    error::{map_init_error, Error},
    presenter::{PanelView, Row},
};

const MAX_ZOOM: u8 = 22;

pub struct HeadlessMap {
    center: Coordinates,
    zoom: u8,
    next_marker: u64,
}

impl HeadlessMap {
    pub fn create(center: Coordinates, zoom: u8) -> Result<Self, Error> {
        if !center.is_valid() {
            return Err(map_init_error("center is out of range"));
        }
        if zoom > MAX_ZOOM {
            return Err(map_init_error("zoom is out of range"));
        }

        tracing::info!("map created at {},{} zoom {}", center.lat, center.lng, zoom);

        Ok(Self {
            center,
            zoom,
            next_marker: 0,
        })
    }

    pub fn center(&self) -> Coordinates {
        self.center
    }
}

#[async_trait]
impl MapSurface for HeadlessMap {
    async fn add_marker(&mut self, coordinates: Coordinates, options: MarkerOptions) -> MarkerHandle {
        self.next_marker += 1;
        tracing::info!(
            marker = self.next_marker,
            "add {} {} at {},{}",
            options.style.glyph,
            options.title,
            coordinates.lat,
            coordinates.lng
        );
        MarkerHandle::new(self.next_marker)
    }

    async fn remove_marker(&mut self, marker: MarkerHandle) {
        tracing::info!(marker = marker.raw(), "remove");
    }

    async fn pan_to(&mut self, center: Coordinates) {
        self.center = center;
        tracing::info!("pan to {},{}", center.lat, center.lng);
    }

    async fn set_zoom(&mut self, zoom: u8) {
        self.zoom = zoom;
        tracing::info!("zoom {}", zoom);
    }

    fn zoom(&self) -> u8 {
        self.zoom
    }

    async fn fit_bounds(&mut self, bounds: Bounds, padding: u32) {
        self.center = bounds.center();
        let (sw, ne) = (bounds.south_west(), bounds.north_east());
        tracing::info!(
            "fit {},{} .. {},{} padding {}",
            sw.lat,
            sw.lng,
            ne.lat,
            ne.lng,
            padding
        );
    }

    async fn open_popup(&mut self, marker: &MarkerHandle, html: String) {
        tracing::info!(marker = marker.raw(), "popup ({} bytes)", html.len());
    }
}

#[derive(Default)]
pub struct ConsoleView;

impl ResultsView for ConsoleView {
    fn show(&mut self, panel: &PanelView) {
        println!("{}", panel.summary);

        for (index, row) in panel.rows.iter().enumerate() {
            match row {
                Row::Place(row) => {
                    let mut line = format!("  [{}] {} {} ({})", index, row.glyph, row.name, row.category);
                    for detail in row.details.iter() {
                        line.push_str(" · ");
                        line.push_str(detail);
                    }
                    println!("{}", line);
                }
                Row::Placeholder(text) | Row::Suggestion(text) => println!("  {}", text),
                Row::Location(text) => println!("  📌 {}", text),
            }
        }
    }

    fn hide(&mut self) {
        println!("(results hidden)");
    }

    fn reset_form(&mut self) {
        println!("(search cleared)");
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("error: {}", message);
    }
}

/// Translates one line of console input into a UI event.
///
/// `:clear`, `:quit`, `:open <id>`, `:cat <category>` and `:type <text>` are
/// commands; anything else is submitted as a search. `category` holds the
/// current selector value across lines.
pub fn parse_command(line: &str, category: &mut CategoryFilter) -> Option<UiEvent> {
    let line = line.trim();

    let (command, rest) = match line.strip_prefix(':') {
        Some(command) => {
            let (name, rest) = command.split_once(' ').unwrap_or((command, ""));
            (Some(name), rest.trim())
        }
        None => (None, line),
    };

    match command {
        None => Some(UiEvent::Submit {
            query: rest.to_string(),
            category: category.clone(),
        }),
        Some("clear") => {
            *category = CategoryFilter::All;
            Some(UiEvent::Clear)
        }
        Some("quit") => Some(UiEvent::Shutdown),
        Some("open") if !rest.is_empty() => Some(UiEvent::Activate(rest.to_string())),
        Some("cat") => {
            *category = CategoryFilter::parse(rest);
            Some(UiEvent::CategoryChanged(category.clone()))
        }
        Some("type") => Some(UiEvent::Input {
            query: rest.to_string(),
            category: category.clone(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Category;

    #[test]
    fn plain_lines_are_submitted_with_current_category() {
        let mut category = CategoryFilter::Only(Category::Park);

        match parse_command("  hyde  ", &mut category) {
            Some(UiEvent::Submit { query, category }) => {
                assert_eq!(query, "hyde");
                assert_eq!(category, CategoryFilter::Only(Category::Park));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn category_command_updates_selector() {
        let mut category = CategoryFilter::All;

        let event = parse_command(":cat museum", &mut category);
        assert!(matches!(
            event,
            Some(UiEvent::CategoryChanged(CategoryFilter::Only(Category::Museum)))
        ));
        assert_eq!(category, CategoryFilter::Only(Category::Museum));

        assert!(matches!(parse_command(":clear", &mut category), Some(UiEvent::Clear)));
        assert_eq!(category, CategoryFilter::All);
    }

    #[test]
    fn other_commands() {
        let mut category = CategoryFilter::All;

        assert!(matches!(
            parse_command(":open moma", &mut category),
            Some(UiEvent::Activate(id)) if id == "moma"
        ));
        assert!(matches!(
            parse_command(":type mus", &mut category),
            Some(UiEvent::Input { query, .. }) if query == "mus"
        ));
        assert!(matches!(parse_command(":quit", &mut category), Some(UiEvent::Shutdown)));
        assert!(parse_command(":open", &mut category).is_none());
        assert!(parse_command(":bogus", &mut category).is_none());
    }

    #[tokio::test]
    async fn headless_map_tracks_zoom_and_center() {
        let mut map = HeadlessMap::create(Coordinates { lat: 0.0, lng: 0.0 }, 3).unwrap();
        let target = Coordinates { lat: 51.5, lng: -0.12 };

        map.set_zoom(14).await;
        map.pan_to(target).await;

        assert_eq!(map.zoom(), 14);
        assert_eq!(map.center(), target);
    }

    #[test]
    fn rejects_unusable_initial_view() {
        let center = Coordinates { lat: 0.0, lng: 0.0 };

        assert_eq!(HeadlessMap::create(center, 30).err().unwrap().code, 7);
        assert!(HeadlessMap::create(Coordinates { lat: 95.0, lng: 0.0 }, 3).is_err());
    }
}
