use crate::geo::{parse_coordinate, LatLng};
use serde::Deserialize;
use serde_json::Value;

/// One record from the listings API, as the map pages see it.
///
/// Coordinates stay raw JSON until [`Listing::coordinates`] asks for
/// them; see `geo::parse_coordinate` for the coercion rules. Fields the
/// provider sends that the map never shows (`id`, `status`, `category`,
/// `location_name`) are simply not modeled here.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub lat: Value,
    #[serde(default)]
    pub lng: Value,

    #[serde(default)]
    pub title: Option<String>,
    /// Pre-formatted "lost on" label, passed through as-is.
    #[serde(default)]
    pub date: Option<String>,
    /// Picture path, possibly relative to the provider.
    #[serde(default)]
    pub picture: Option<String>,
    /// Detail page to open when the marker is clicked.
    #[serde(default)]
    pub url: Option<String>,
}

impl Listing {
    /// The record's position, or `None` when either coordinate fails
    /// to coerce to a finite number.
    pub fn coordinates(&self) -> Option<LatLng> {
        let lat = parse_coordinate(&self.lat)?;
        let lng = parse_coordinate(&self.lng)?;
        Some(LatLng::new(lat, lng))
    }
}
