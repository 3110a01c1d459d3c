use crate::domain::Listing;
use crate::geo::{LatLng, LatLngBounds};
use crate::templates::components::listing_tooltip;
use crate::widgets::{js_str, tile_layer_js, DEFAULT_CENTER};
use std::fmt::Write;

/// Starting zoom for the city-wide overview.
pub const OVERVIEW_ZOOM: u8 = 11;

/// Fraction of the marker bounds added as margin on every side.
pub const BOUNDS_PADDING: f64 = 0.15;

/// One rendered point annotation.
#[derive(Debug, Clone)]
pub struct Marker {
    pub position: LatLng,
    /// Hover preview, already rendered to HTML.
    pub tooltip_html: String,
    /// Full-page navigation target for a click, when the listing has one.
    pub nav_url: Option<String>,
}

/// Where the map should be looking once markers are in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    /// No markers: stay at the default center and zoom.
    Default { center: LatLng, zoom: u8 },
    /// Fit the padded bounds around every marker.
    Fit(LatLngBounds),
}

/// The listings overview map.
///
/// The canvas is renderable from `new` on; `populate` only adds the
/// marker layer, so a failed or empty fetch still leaves a working map.
pub struct ListingsMapView {
    container_id: String,
    markers: Vec<Marker>,
}

impl ListingsMapView {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
            markers: Vec::new(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Turn fetched listings into markers. Records whose coordinates
    /// do not coerce to finite numbers are skipped with a warning,
    /// never placed at a made-up position.
    pub fn populate(&mut self, listings: &[Listing]) {
        for listing in listings {
            let Some(position) = listing.coordinates() else {
                eprintln!(
                    "⚠️ Skipping listing with bad coordinates: {}",
                    listing.title.as_deref().unwrap_or("<untitled>")
                );
                continue;
            };

            self.markers.push(Marker {
                position,
                tooltip_html: listing_tooltip(listing).into_string(),
                nav_url: listing.url.clone(),
            });
        }
    }

    pub fn viewport(&self) -> Viewport {
        let points: Vec<LatLng> = self.markers.iter().map(|m| m.position).collect();

        match LatLngBounds::from_points(&points) {
            Some(bounds) => Viewport::Fit(bounds.pad(BOUNDS_PADDING)),
            None => Viewport::Default {
                center: DEFAULT_CENTER,
                zoom: OVERVIEW_ZOOM,
            },
        }
    }

    /// The Leaflet bootstrap for this view, embedded by the map page.
    pub fn leaflet_script(&self) -> String {
        let mut js = String::new();

        let _ = writeln!(
            js,
            "const map = L.map({}).setView([{}, {}], {});",
            js_str(&self.container_id),
            DEFAULT_CENTER.lat,
            DEFAULT_CENTER.lng,
            OVERVIEW_ZOOM
        );
        let _ = writeln!(js, "{}", tile_layer_js());

        for (i, marker) in self.markers.iter().enumerate() {
            let _ = writeln!(
                js,
                "const m{i} = L.marker([{}, {}]).addTo(map);",
                marker.position.lat, marker.position.lng
            );
            let _ = writeln!(
                js,
                "m{i}.bindTooltip({}, {{ direction: 'top', sticky: true, className: 'listing-content' }});",
                js_str(&marker.tooltip_html)
            );

            if let Some(url) = &marker.nav_url {
                let _ = writeln!(
                    js,
                    "m{i}.on('click', () => {{ location.href = {}; }});",
                    js_str(url)
                );
            }
        }

        if let Viewport::Fit(b) = self.viewport() {
            let _ = writeln!(
                js,
                "map.fitBounds([[{}, {}], [{}, {}]]);",
                b.south, b.west, b.north, b.east
            );
        }

        js
    }
}
