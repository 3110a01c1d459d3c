pub mod bounds;

pub use bounds::LatLngBounds;

use serde_json::Value;

/// A WGS84 coordinate pair, in the `[lat, lng]` order Leaflet uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Parse one coordinate field from a provider record.
///
/// The listings API serves coordinates as JSON numbers, but older
/// records carry them as strings, so both are accepted. Anything that
/// does not coerce to a finite number yields `None` and the caller is
/// expected to skip the record rather than let a NaN reach the map.
pub fn parse_coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_coordinate_str(s),
        _ => None,
    }
}

/// String form of [`parse_coordinate`], for query parameters and
/// pre-filled form inputs. Same finite-or-nothing policy.
pub fn parse_coordinate_str(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
