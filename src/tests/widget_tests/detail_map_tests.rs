// src/tests/widget_tests/detail_map_tests.rs

use crate::geo::LatLng;
use crate::widgets::DetailMap;

#[test]
fn renders_one_fixed_marker_at_the_given_spot() {
    let map = DetailMap::new("map-display-details", LatLng::new(42.5, 23.5));
    assert_eq!(map.position(), LatLng::new(42.5, 23.5));

    let script = map.leaflet_script();
    assert!(script.contains("L.map(\"map-display-details\")"));
    assert!(script.contains("setView([42.5, 23.5], 15)"));
    assert!(script.contains("draggable: false"));
    assert_eq!(script.matches("L.marker").count(), 1);
}
