pub mod detail_map;
pub mod edit_map;
pub mod map_view;

pub use detail_map::DetailMap;
pub use edit_map::CoordinateEditMap;
pub use map_view::{ListingsMapView, Viewport};

use crate::geo::LatLng;

/// City-center fallback used whenever nothing better is known.
pub const DEFAULT_CENTER: LatLng = LatLng::new(42.6977, 23.3219);

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap";
pub const MAX_TILE_ZOOM: u8 = 19;

/// A JS string literal, escaped through the JSON encoder.
///
/// JSON escaping alone leaves `<` intact, which is enough for a
/// provider-supplied value to smuggle a closing `</script>` tag into
/// the inline block, so `<` goes out as `\u003c` as well.
pub(crate) fn js_str(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| String::from("\"\""))
        .replace('<', "\\u003c")
}

/// The OpenStreetMap tile layer every widget shares.
pub(crate) fn tile_layer_js() -> String {
    format!(
        "L.tileLayer({url}, {{\n    maxZoom: {zoom}, attribution: {attr}\n}}).addTo(map);",
        url = js_str(TILE_URL),
        zoom = MAX_TILE_ZOOM,
        attr = js_str(TILE_ATTRIBUTION),
    )
}
