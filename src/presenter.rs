use crate::entities::{Place, SearchOutcome};
use crate::render::{escape, price_text, rating_text};

pub const NO_MATCHES: &str = "No matches found";

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceRow {
    pub place_id: String,
    pub glyph: &'static str,
    pub color: &'static str,
    pub name: String,
    pub category: String,
    pub details: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Row {
    Place(PlaceRow),
    Placeholder(String),
    Location(String),
    Suggestion(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub summary: String,
    pub rows: Vec<Row>,
}

impl PanelView {
    /// Place id behind the row at `index`, if that row is activatable.
    pub fn activate(&self, index: usize) -> Option<&str> {
        match self.rows.get(index)? {
            Row::Place(row) => Some(row.place_id.as_str()),
            _ => None,
        }
    }

    pub fn place_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r, Row::Place(_)))
            .count()
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<p class=\"summary\">{}</p><ul>", escape(&self.summary));

        for row in self.rows.iter() {
            let item = match row {
                Row::Place(row) => format!(
                    "<li data-place-id=\"{id}\"><span style=\"color:{color}\">{glyph}</span><div><div>{name}</div><div class=\"muted\">{details}</div></div><button type=\"button\" aria-label=\"Show on map\">View</button></li>",
                    id = escape(&row.place_id),
                    color = row.color,
                    glyph = row.glyph,
                    name = escape(&row.name),
                    details = escape(&std::iter::once(row.category.clone()).chain(row.details.iter().cloned()).collect::<Vec<_>>().join(" · ")),
                ),
                Row::Placeholder(text) => format!("<li><span class=\"muted\">{}</span></li>", escape(text)),
                Row::Location(text) => format!("<li class=\"location\">📌 {}</li>", escape(text)),
                Row::Suggestion(text) => format!("<li><span class=\"muted\">{}</span></li>", escape(text)),
            };

            html.push_str(&item);
        }

        html.push_str("</ul>");
        html
    }
}

pub fn summary(count: usize) -> String {
    match count {
        1 => "1 result".into(),
        n => format!("{} results", n),
    }
}

fn place_row(place: &Place) -> PlaceRow {
    let style = place.category.style();

    let mut details = vec![];
    if let Some(rating) = place.rating {
        details.push(rating_text(rating));
    }
    if let Some(level) = place.price_level {
        details.push(price_text(level));
    }
    if let Some(address) = &place.address {
        details.push(address.clone());
    }

    PlaceRow {
        place_id: place.id.clone(),
        glyph: style.glyph,
        color: style.color,
        name: place.name.clone(),
        category: place.category.label().to_string(),
        details,
    }
}

pub fn present(outcome: &SearchOutcome) -> PanelView {
    let results = &outcome.state.results;

    let rows = match (&outcome.resolved, results.is_empty()) {
        (Some(location), true) => vec![
            Row::Location(location.description.clone()),
            Row::Suggestion(format!(
                "No places found near {}. Try a keyword like \"museum\" or \"coffee\".",
                location.description
            )),
        ],
        (None, true) => vec![Row::Placeholder(NO_MATCHES.into())],
        _ => results.iter().map(|p| Row::Place(place_row(p))).collect(),
    };

    PanelView {
        summary: summary(results.len()),
        rows,
    }
}
