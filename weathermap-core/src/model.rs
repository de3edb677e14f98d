/// Weather attributes and coordinates resolved from a free-text location.
///
/// Produced fresh per lookup and discarded once rendered; nothing stores it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub name: String,
    pub lat: f64,
    pub long: f64,
    /// Temperature in degrees Fahrenheit.
    pub temp_f: f64,
    /// Wind speed in miles per hour.
    pub wind_mph: f64,
    pub description: String,
    /// OpenWeather icon identifier, e.g. "01d".
    pub icon: String,
}

/// Result of a lookup that reached the endpoint.
///
/// A semantic no-match is a normal, fully-formed outcome the caller branches
/// on, not an error. Transport failures are [`LookupError`](crate::error::LookupError).
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(WeatherReport),
    NotFound,
}
