// templates/pages/edit_page.rs

use crate::templates::desktop_layout;
use crate::widgets::CoordinateEditMap;
use maud::{html, Markup, PreEscaped};

pub fn edit_page(map: &CoordinateEditMap) -> Markup {
    desktop_layout(
        "Избор на местоположение",
        html! {
            main {
                h1 { "Къде е изгубена вещта?" }
                p { "Преместете маркера до точното място. Координатите се попълват автоматично." }

                form class="coord-form" {
                    label for=(map.lat_input_id()) { "Ширина" }
                    input
                        type="text"
                        id=(map.lat_input_id())
                        name="lat"
                        value=(CoordinateEditMap::format_coordinate(map.start().lat));

                    label for=(map.lng_input_id()) { "Дължина" }
                    input
                        type="text"
                        id=(map.lng_input_id())
                        name="lng"
                        value=(CoordinateEditMap::format_coordinate(map.start().lng));
                }

                div id=(map.container_id()) class="map-canvas" {}
                script { (PreEscaped(map.leaflet_script())) }
            }
        },
    )
}
