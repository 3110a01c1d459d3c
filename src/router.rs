use crate::errors::{ResultResp, ServerError};
use crate::geo::{parse_coordinate_str, LatLng};
use crate::provider::ListingsProvider;
use crate::responses::html_response;
use crate::templates;
use crate::widgets::{CoordinateEditMap, DetailMap, ListingsMapView};
use astra::Request;

pub fn handle(req: Request, provider: &ListingsProvider) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        // Listings overview. The canvas is built first; the fetch only
        // gates the marker layer, so a dead provider still gets a map.
        ("GET", "/") => {
            let mut view = ListingsMapView::new("map-page");

            match provider.fetch_listings() {
                Ok(listings) => view.populate(&listings),
                Err(e) => eprintln!("⚠️ Listings fetch failed, serving the bare map: {e}"),
            }

            html_response(templates::pages::map_page(&view))
        }

        // Coordinate picker for a new listing, optionally pre-filled.
        ("GET", "/listings/new") => {
            let params = parse_query(&req);

            let map = CoordinateEditMap::new(
                "map",
                "coordinateX",
                "coordinateY",
                params.get("lat").map(String::as_str),
                params.get("lng").map(String::as_str),
            );

            html_response(templates::pages::edit_page(&map))
        }

        // Read-only close-up for one listing's spot.
        ("GET", "/listings/location") => {
            let params = parse_query(&req);

            let lat = params.get("lat").and_then(|s| parse_coordinate_str(s));
            let lng = params.get("lng").and_then(|s| parse_coordinate_str(s));

            match (lat, lng) {
                (Some(lat), Some(lng)) => {
                    let map = DetailMap::new("map-display-details", LatLng::new(lat, lng));
                    html_response(templates::pages::detail_page(&map))
                }
                _ => Err(ServerError::BadRequest(
                    "lat and lng query parameters must be finite numbers".to_string(),
                )),
            }
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> std::collections::HashMap<String, String> {
    let mut map = std::collections::HashMap::new();

    if let Some(q) = req.uri().query() {
        // form-decoding handles both %XX sequences and '+' for space
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.insert(k.into_owned(), v.into_owned());
        }
    }

    map
}
