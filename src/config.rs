use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::entities::Coordinates;
use crate::error::{configuration_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Static,
    Live,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value.trim().to_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "live" => Ok(Self::Live),
            _ => Err(configuration_error("PLACEFINDER_MODE must be static or live")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mode: Mode,
    pub api_key: Option<String>,
    pub api_base: String,
    pub catalog_path: Option<PathBuf>,
    pub default_center: Coordinates,
    pub default_zoom: u8,
    pub detail_zoom: u8,
    pub fit_padding: u32,
    pub search_radius: u32,
    pub max_results: usize,
    pub debounce: Duration,
    pub min_query_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Static,
            api_key: None,
            api_base: "maps.googleapis.com".into(),
            catalog_path: None,
            default_center: Coordinates {
                lat: 40.7589,
                lng: -73.9851,
            },
            default_zoom: 12,
            detail_zoom: 14,
            fit_padding: 30,
            search_radius: 50_000,
            max_results: 20,
            debounce: Duration::from_millis(300),
            min_query_len: 2,
        }
    }
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_center = match lookup("PLACEFINDER_CENTER") {
            Some(value) => parse_center(&value)?,
            None => defaults.default_center,
        };

        let config = Self {
            mode: parse_or(&lookup, "PLACEFINDER_MODE", defaults.mode)?,
            api_key: lookup("GOOGLE_MAPS_API_KEY").filter(|key| !key.trim().is_empty()),
            api_base: lookup("GOOGLE_MAPS_API_BASE").unwrap_or(defaults.api_base),
            catalog_path: lookup("PLACEFINDER_CATALOG").map(PathBuf::from),
            default_center,
            default_zoom: parse_or(&lookup, "PLACEFINDER_ZOOM", defaults.default_zoom)?,
            detail_zoom: parse_or(&lookup, "PLACEFINDER_DETAIL_ZOOM", defaults.detail_zoom)?,
            fit_padding: parse_or(&lookup, "PLACEFINDER_FIT_PADDING", defaults.fit_padding)?,
            search_radius: parse_or(&lookup, "PLACEFINDER_SEARCH_RADIUS", defaults.search_radius)?,
            max_results: parse_or(&lookup, "PLACEFINDER_MAX_RESULTS", defaults.max_results)?,
            debounce: Duration::from_millis(parse_or(
                &lookup,
                "PLACEFINDER_DEBOUNCE_MS",
                defaults.debounce.as_millis() as u64,
            )?),
            min_query_len: parse_or(&lookup, "PLACEFINDER_MIN_QUERY_LEN", defaults.min_query_len)?,
        };

        Ok(config)
    }

    /// The live variant cannot start without a provider key.
    pub fn require_api_key(&self) -> Result<&str, Error> {
        self.api_key
            .as_deref()
            .ok_or_else(|| configuration_error("GOOGLE_MAPS_API_KEY is not set"))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| configuration_error(&format!("{} has an invalid value", key))),
        None => Ok(default),
    }
}

fn parse_center(value: &str) -> Result<Coordinates, Error> {
    let invalid = || configuration_error("PLACEFINDER_CENTER must be lat,lng");

    let (lat, lng) = value.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;

    Coordinates::new(lat, lng).map_err(|_| invalid())
}
