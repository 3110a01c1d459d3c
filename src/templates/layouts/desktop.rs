use maud::{html, Markup, PreEscaped, DOCTYPE};

const SITE_CSS: &str = "
body { margin: 0; font-family: system-ui, sans-serif; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.2); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main { padding: 1rem 1.5rem; }
.map-canvas { height: 70vh; width: 100%; }
.map-canvas-full { height: calc(100vh - 56px); width: 100%; }
.coord-form { display: flex; gap: 10px; align-items: center; margin-bottom: 1rem; }
.coord-form input { padding: 6px; font-size: 15px; }
.lf-title { font-weight: 600; }
.lf-date { font-size: 0.85em; color: #555; }
";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
                // Leaflet must be in before any page script runs.
                script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" {}
                style { (PreEscaped(SITE_CSS)) }
            }
            body {
                header {
                    h3 { "Изгубено и намерено" }
                    nav {
                        ul {
                            li { a href="/" { "Карта" } }
                            li { a href="/listings/new" { "Нова обява" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
