use crate::geo::LatLng;
use crate::widgets::{js_str, tile_layer_js};
use std::fmt::Write;

/// Zoom for the single-listing close-up.
pub const DETAIL_ZOOM: u8 = 15;

/// Read-only close-up map with one fixed marker.
pub struct DetailMap {
    container_id: String,
    position: LatLng,
}

impl DetailMap {
    pub fn new(container_id: &str, position: LatLng) -> Self {
        Self {
            container_id: container_id.to_string(),
            position,
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn leaflet_script(&self) -> String {
        let mut js = String::new();

        let _ = writeln!(
            js,
            "const map = L.map({}).setView([{}, {}], {});",
            js_str(&self.container_id),
            self.position.lat,
            self.position.lng,
            DETAIL_ZOOM
        );
        let _ = writeln!(js, "{}", tile_layer_js());
        let _ = writeln!(
            js,
            "L.marker([{}, {}], {{ draggable: false }}).addTo(map);",
            self.position.lat, self.position.lng
        );

        js
    }
}
