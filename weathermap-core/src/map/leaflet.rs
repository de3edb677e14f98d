//! Renders a [`MapView`] as a self-contained Leaflet HTML document.
//!
//! All coupling to the mapping library lives here. The generated page drives
//! Leaflet through its minimal contract only: map creation plus `setView`,
//! `tileLayer`, `marker`, and `bindPopup`/`openPopup`.

use super::{MapView, TILE_MAX_ZOOM, TILE_URL};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Serialize the map view into a complete HTML page.
pub fn page_html(map: &MapView, title: &str) -> String {
    let center = map.center();

    let mut script = String::new();
    script.push_str(&format!(
        "const map = L.map('map').setView([{}, {}], {});\n",
        center.lat,
        center.lng,
        map.zoom(),
    ));
    script.push_str(&format!(
        "L.tileLayer({}, {{ maxZoom: {} }}).addTo(map);\n",
        js_str(TILE_URL),
        TILE_MAX_ZOOM,
    ));

    for (index, marker) in map.markers().iter().enumerate() {
        let open = if map.open_popup() == Some(index) {
            ".openPopup()"
        } else {
            ""
        };
        script.push_str(&format!(
            "L.marker([{}, {}]).addTo(map).bindPopup({}){};\n",
            marker.position.lat,
            marker.position.lng,
            js_str(&marker.popup_html),
            open,
        ));
    }

    format!(
        "<!doctype html>\n\
         <html>\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <title>{title}</title>\n\
           <link rel=\"stylesheet\" href=\"{LEAFLET_CSS}\">\n\
           <script src=\"{LEAFLET_JS}\"></script>\n\
           <style>html, body, #map {{ height: 100%; margin: 0; }}</style>\n\
         </head>\n\
         <body>\n\
           <div id=\"map\"></div>\n\
           <script>\n{script}</script>\n\
         </body>\n\
         </html>\n"
    )
}

/// Encode a string as a JavaScript string literal.
fn js_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::LatLng;

    #[test]
    fn page_sets_view_and_tile_layer() {
        let map = MapView::new(LatLng::new(33.7756222, -84.398479), 13);
        let page = page_html(&map, "Weather map");

        assert!(page.contains("<title>Weather map</title>"));
        assert!(page.contains("setView([33.7756222, -84.398479], 13)"));
        assert!(page.contains("tile.openstreetmap.org"));
        assert!(page.contains("maxZoom: 19"));
        assert!(!page.contains("L.marker"));
    }

    #[test]
    fn page_emits_every_marker_and_opens_only_the_newest_popup() {
        let mut map = MapView::new(LatLng::new(0.0, 0.0), 13);
        map.add_marker(1.5, 2.5, "<p>first</p>".to_string());
        map.add_marker(3.5, 4.5, "<p>second</p>".to_string());

        let page = page_html(&map, "Weather map");

        assert_eq!(page.matches("L.marker").count(), 2);
        assert_eq!(page.matches(".openPopup()").count(), 1);
        assert!(page.contains("L.marker([3.5, 4.5]).addTo(map).bindPopup(\"<p>second</p>\").openPopup();"));
    }

    #[test]
    fn popup_html_is_escaped_as_a_js_literal() {
        let mut map = MapView::new(LatLng::new(0.0, 0.0), 13);
        map.add_marker(1.0, 1.0, "<p>he said \"hi\"</p>".to_string());

        let page = page_html(&map, "Weather map");
        assert!(page.contains(r#"bindPopup("<p>he said \"hi\"</p>")"#));
    }
}
