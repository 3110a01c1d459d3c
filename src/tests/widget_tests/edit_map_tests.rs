// src/tests/widget_tests/edit_map_tests.rs

use crate::geo::LatLng;
use crate::widgets::{CoordinateEditMap, DEFAULT_CENTER};

fn edit_map(lat: Option<&str>, lng: Option<&str>) -> CoordinateEditMap {
    CoordinateEditMap::new("map", "coordinateX", "coordinateY", lat, lng)
}

#[test]
fn starts_from_prefilled_inputs() {
    let map = edit_map(Some("41.5"), Some("24.25"));
    assert_eq!(map.start(), LatLng::new(41.5, 24.25));
}

#[test]
fn each_axis_falls_back_to_the_default_center_alone() {
    let map = edit_map(Some("41.5"), Some("not a number"));
    assert_eq!(map.start().lat, 41.5);
    assert_eq!(map.start().lng, DEFAULT_CENTER.lng);

    let map = edit_map(None, None);
    assert_eq!(map.start(), DEFAULT_CENTER);
}

#[test]
fn dragging_writes_six_decimal_coordinates_back() {
    assert_eq!(CoordinateEditMap::format_coordinate(42.69774999), "42.697750");
    assert_eq!(CoordinateEditMap::format_coordinate(23.0), "23.000000");

    let script = edit_map(None, None).leaflet_script();
    assert!(script.contains("dragend"));
    assert!(script.contains("toFixed(6)"));
    assert!(script.contains("\"coordinateX\""));
    assert!(script.contains("\"coordinateY\""));
}

#[test]
fn the_marker_is_draggable() {
    let script = edit_map(Some("42.5"), Some("23.5")).leaflet_script();
    assert!(script.contains("draggable: true"));
    assert!(script.contains("setView([42.5, 23.5], 13)"));
}
