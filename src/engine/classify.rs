const ADMINISTRATIVE_KEYWORDS: [&str; 14] = [
    "city", "county", "state", "province", "country", "region", "district", "town", "village",
    "borough", "prefecture", "municipality", "neighborhood", "neighbourhood",
];

/// Independent signals that a query names a region rather than a kind of place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocationSignals {
    pub comma: bool,
    pub region_code: bool,
    pub short_place_name: bool,
    pub administrative_keyword: bool,
}

impl LocationSignals {
    pub fn of(text: &str) -> Self {
        let text = text.trim();
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let region_code = tokens
            .iter()
            .any(|t| t.len() == 2 && t.chars().all(|c| c.is_ascii_uppercase()));

        let short_place_name = !tokens.is_empty()
            && tokens.len() <= 3
            && tokens
                .iter()
                .all(|t| t.chars().next().map_or(false, char::is_uppercase));

        let administrative_keyword = tokens.iter().any(|t| {
            let t = t.to_lowercase();
            ADMINISTRATIVE_KEYWORDS.contains(&t.as_str())
        });

        Self {
            comma: text.contains(','),
            region_code,
            short_place_name,
            administrative_keyword,
        }
    }

    pub fn any(&self) -> bool {
        self.comma || self.region_code || self.short_place_name || self.administrative_keyword
    }
}

pub fn is_location_query(text: &str) -> bool {
    LocationSignals::of(text).any()
}

#[test]
fn comma_marks_a_location() {
    let signals = LocationSignals::of("Paris, France");
    assert!(signals.comma);
    assert!(signals.any());
}

#[test]
fn region_codes_mark_a_location() {
    assert!(LocationSignals::of("austin TX").region_code);
    assert!(!LocationSignals::of("austin tx").region_code);
    assert!(!LocationSignals::of("USA").region_code);
}

#[test]
fn short_capitalised_names_mark_a_location() {
    assert!(is_location_query("Tokyo"));
    assert!(is_location_query("New York"));
    assert!(!LocationSignals::of("Best Pizza In Town Today").short_place_name);
}

#[test]
fn administrative_keywords_mark_a_location() {
    assert!(is_location_query("kings county"));
    assert!(is_location_query("old town"));
}

#[test]
fn plain_keywords_are_not_locations() {
    assert!(!is_location_query("pizza"));
    assert!(!is_location_query("coffee near me"));
    assert!(!is_location_query("   "));
}
