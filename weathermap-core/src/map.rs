use crate::model::WeatherReport;

pub mod leaflet;

/// Geographic coordinate pair, Leaflet field order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Fixed OpenStreetMap tile layer; there is no base-layer switching.
pub const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_MAX_ZOOM: u8 = 19;

/// Zoom applied when the view recenters on a lookup hit.
pub const MARKER_ZOOM: u8 = 10;

/// A pin on the map with an attached popup of weather details.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub popup_html: String,
}

/// Owned map-view state: the viewport plus every marker placed so far.
///
/// Markers only accumulate; nothing here removes one. Repeated lookups pile
/// pins onto the map, matching the widget this wraps.
#[derive(Debug, Clone)]
pub struct MapView {
    center: LatLng,
    zoom: u8,
    markers: Vec<Marker>,
    open_popup: Option<usize>,
}

impl MapView {
    /// One-time setup: initial viewport, fixed tile layer, no markers.
    pub fn new(center: LatLng, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            markers: Vec::new(),
            open_popup: None,
        }
    }

    /// Move the viewport without touching existing markers.
    pub fn recenter(&mut self, lat: f64, lng: f64, zoom: u8) {
        self.center = LatLng::new(lat, lng);
        self.zoom = zoom;
    }

    /// Place a new marker and open its popup. Opening a popup closes the
    /// previously open one; the markers themselves stay.
    pub fn add_marker(&mut self, lat: f64, lng: f64, popup_html: String) {
        self.markers.push(Marker {
            position: LatLng::new(lat, lng),
            popup_html,
        });
        self.open_popup = Some(self.markers.len() - 1);
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Index of the marker whose popup is currently open, if any.
    pub fn open_popup(&self) -> Option<usize> {
        self.open_popup
    }
}

/// Popup fragment for a weather report: place name, condition icon,
/// temperature, wind speed, description.
pub fn weather_popup(report: &WeatherReport) -> String {
    format!(
        "<div>\n  <h4>{name}</h4>\n  \
         <img src=\"https://openweathermap.org/img/wn/{icon}@2x.png\">\n  \
         <p>Temperature: {temp}°F</p>\n  \
         <p>Wind Speed: {wind} mph</p>\n  \
         <p>Description: {description}</p>\n</div>",
        name = report.name,
        icon = report.icon,
        temp = report.temp_f,
        wind = report.wind_mph,
        description = report.description,
    )
}
