use crate::geo::{parse_coordinate_str, LatLng};
use crate::widgets::{js_str, tile_layer_js, DEFAULT_CENTER};
use std::fmt::Write;

/// Starting zoom when picking a spot for a new listing.
pub const EDIT_ZOOM: u8 = 13;

/// A draggable marker wired to two coordinate text inputs. Dragging
/// the marker rewrites the inputs; the surrounding form owns them from
/// there.
pub struct CoordinateEditMap {
    container_id: String,
    lat_input_id: String,
    lng_input_id: String,
    start: LatLng,
}

impl CoordinateEditMap {
    /// `initial_lat`/`initial_lng` carry whatever the inputs already
    /// hold, e.g. when re-editing a listing. Each axis falls back to
    /// the default center on its own, matching how the form behaves
    /// when only one field was filled in.
    pub fn new(
        container_id: &str,
        lat_input_id: &str,
        lng_input_id: &str,
        initial_lat: Option<&str>,
        initial_lng: Option<&str>,
    ) -> Self {
        let lat = initial_lat
            .and_then(parse_coordinate_str)
            .unwrap_or(DEFAULT_CENTER.lat);
        let lng = initial_lng
            .and_then(parse_coordinate_str)
            .unwrap_or(DEFAULT_CENTER.lng);

        Self {
            container_id: container_id.to_string(),
            lat_input_id: lat_input_id.to_string(),
            lng_input_id: lng_input_id.to_string(),
            start: LatLng::new(lat, lng),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn lat_input_id(&self) -> &str {
        &self.lat_input_id
    }

    pub fn lng_input_id(&self) -> &str {
        &self.lng_input_id
    }

    pub fn start(&self) -> LatLng {
        self.start
    }

    /// How a dragged position is written back into the inputs.
    pub fn format_coordinate(value: f64) -> String {
        format!("{value:.6}")
    }

    pub fn leaflet_script(&self) -> String {
        let mut js = String::new();

        let _ = writeln!(
            js,
            "const latInput = document.getElementById({});",
            js_str(&self.lat_input_id)
        );
        let _ = writeln!(
            js,
            "const lngInput = document.getElementById({});",
            js_str(&self.lng_input_id)
        );
        let _ = writeln!(
            js,
            "const map = L.map({}).setView([{}, {}], {});",
            js_str(&self.container_id),
            self.start.lat,
            self.start.lng,
            EDIT_ZOOM
        );
        let _ = writeln!(js, "{}", tile_layer_js());
        let _ = writeln!(
            js,
            "const marker = L.marker([{}, {}], {{ draggable: true }}).addTo(map);",
            self.start.lat, self.start.lng
        );
        let _ = writeln!(
            js,
            "function updateInputs(latlng) {{\n    latInput.value = latlng.lat.toFixed(6);\n    lngInput.value = latlng.lng.toFixed(6);\n}}"
        );
        let _ = writeln!(js, "updateInputs(marker.getLatLng());");
        let _ = writeln!(
            js,
            "marker.on('dragend', (e) => {{ updateInputs(e.target.getLatLng()); }});"
        );

        js
    }
}
