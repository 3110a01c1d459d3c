// src/tests/router_tests/pages_tests.rs

use crate::errors::ServerError;
use crate::provider::ListingsProvider;
use crate::router::handle;
use crate::tests::utils::read_body;
use astra::{Body, Request};

/// Provider pointed at a loopback port nothing listens on: the fetch
/// fails fast with a refused connection.
fn unreachable_provider() -> ListingsProvider {
    ListingsProvider::new("http://127.0.0.1:9").expect("provider should build")
}

fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.uri_mut() = path.parse().expect("test path should parse");
    req
}

#[test]
fn map_page_still_serves_a_bare_map_when_the_provider_is_down() {
    let provider = unreachable_provider();

    let mut resp = handle(get("/"), &provider).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(body.contains("map-page"));
    assert!(body.contains("L.map"));
    assert!(body.contains("tile.openstreetmap.org"));
    // no listings made it in, so the default viewport stands
    assert!(!body.contains("fitBounds"));
}

#[test]
fn new_listing_page_prefills_the_coordinate_inputs() {
    let provider = unreachable_provider();

    let mut resp = handle(get("/listings/new?lat=41.9&lng=24.1"), &provider).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(body.contains("coordinateX"));
    assert!(body.contains("coordinateY"));
    assert!(body.contains("41.900000"));
    assert!(body.contains("24.100000"));
    assert!(body.contains("draggable: true"));
}

#[test]
fn location_page_requires_finite_coordinates() {
    let provider = unreachable_provider();

    let err = handle(get("/listings/location?lat=42.5&lng=bad"), &provider).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = handle(get("/listings/location"), &provider).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let mut resp = handle(get("/listings/location?lat=42.5&lng=23.5"), &provider).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(&mut resp).contains("map-display-details"));
}

#[test]
fn query_values_are_percent_decoded() {
    let provider = unreachable_provider();

    // %20-padded numbers survive decoding and the parse trims them
    let mut resp = handle(get("/listings/location?lat=%2042.5%20&lng=23.5"), &provider).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(&mut resp).contains("setView([42.5, 23.5], 15)"));

    // '+' is form-encoding for a space, not part of the number
    let mut resp = handle(get("/listings/location?lat=+41.9&lng=23.5"), &provider).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(&mut resp).contains("setView([41.9, 23.5], 15)"));
}

#[test]
fn unknown_routes_are_not_found() {
    let provider = unreachable_provider();

    let err = handle(get("/nope"), &provider).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
