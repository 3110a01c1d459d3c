// templates/pages/detail_page.rs

use crate::templates::desktop_layout;
use crate::widgets::DetailMap;
use maud::{html, Markup, PreEscaped};

pub fn detail_page(map: &DetailMap) -> Markup {
    desktop_layout(
        "Местоположение на обявата",
        html! {
            main {
                h1 { "Местоположение" }
                div id=(map.container_id()) class="map-canvas" {}
                script { (PreEscaped(map.leaflet_script())) }
            }
        },
    )
}
