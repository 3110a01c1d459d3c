// templates/pages/map_page.rs

use crate::templates::desktop_layout;
use crate::widgets::ListingsMapView;
use maud::{html, Markup, PreEscaped};

/// The listings overview: a full-height canvas plus the view's
/// Leaflet bootstrap. The markup stays the same whether the view was
/// populated or the fetch came back empty-handed.
pub fn map_page(view: &ListingsMapView) -> Markup {
    desktop_layout(
        "Карта на обявите",
        html! {
            div id=(view.container_id()) class="map-canvas-full" {}
            script { (PreEscaped(view.leaflet_script())) }
        },
    )
}
