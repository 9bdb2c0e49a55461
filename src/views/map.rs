use serde::Serialize;

use crate::data::models::RestaurantRecord;
use crate::router::View;
use crate::views::layout;

const CENTER: (f64, f64) = (48.8566, 2.3522);
const ZOOM: u8 = 5;
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

#[derive(Debug, Serialize, PartialEq)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub place: String,
    pub visit_date: String
}

/// One marker per record that has coordinates, in store order.
pub fn markers(records: &[RestaurantRecord]) -> Vec<Marker> {
    records
        .iter()
        .filter_map(|r| {
            r.coordinates.map(|c| Marker {
                lat: c.lat(),
                lon: c.lon(),
                name: r.name.clone(),
                place: r.place.clone(),
                visit_date: r.visit_date.clone()
            })
        })
        .collect()
}

/// JSON that can sit inside a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

pub fn render(records: &[RestaurantRecord], tile_url: &str) -> Result<String, serde_json::Error> {
    let markers = script_json(&markers(records))?;
    let tile_url = script_json(tile_url)?;

    let head = format!(
        "<link rel=\"stylesheet\" href=\"{}\">\n<script src=\"{}\"></script>\n",
        LEAFLET_CSS, LEAFLET_JS
    );
    let body = format!(
        r#"<h1>📍 Carte des restaurants</h1>
<div id="map" style="height: 70vh; width: 100%"></div>
<script>
const map = L.map("map").setView([{lat}, {lon}], {zoom});
L.tileLayer({tile_url}, {{ attribution: "© OpenStreetMap contributors" }}).addTo(map);
const markers = {markers};
for (const m of markers) {{
  const popup = document.createElement("div");
  const name = document.createElement("strong");
  name.textContent = m.name;
  popup.append(name, document.createElement("br"), m.place, document.createElement("br"), m.visit_date);
  L.marker([m.lat, m.lon]).addTo(map).bindPopup(popup);
}}
</script>
"#,
        lat = CENTER.0,
        lon = CENTER.1,
        zoom = ZOOM,
        tile_url = tile_url,
        markers = markers
    );

    Ok(layout("Carte", Some(View::Map), &head, &body))
}
