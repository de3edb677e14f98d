use crate::{
    lookup::WeatherLookup,
    map::{self, MARKER_ZOOM, MapView},
    model::LookupOutcome,
    store::SearchLog,
};

/// User-facing surface the controller writes to: a single overwritten alert
/// area and the rendered history area.
pub trait SearchPage {
    fn show_alert(&mut self, message: &str);
    fn show_history(&mut self, rendered: &str);
}

/// Which transition a submit took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Lookup hit: the map was recentered and a marker added.
    Marked,
    /// The endpoint could not resolve the location.
    NotFound,
    /// The lookup failed at the transport level.
    Failed,
}

/// Orchestrates submit → lookup → map update → log update → history render.
///
/// Owns the map view and the search log. Errors never escape: every submit
/// settles back into an interactive idle state.
pub struct SearchController<P: SearchPage> {
    lookup: Box<dyn WeatherLookup>,
    log: SearchLog,
    map: MapView,
    page: P,
}

impl<P: SearchPage> SearchController<P> {
    pub fn new(lookup: Box<dyn WeatherLookup>, log: SearchLog, map: MapView, page: P) -> Self {
        Self {
            lookup,
            log,
            map,
            page,
        }
    }

    /// Re-render the history display from the persisted source of truth.
    pub fn refresh_history(&mut self) {
        let rendered = self.log.list().join(", ");
        self.page.show_history(&rendered);
    }

    /// Handle one submit of the raw input, verbatim — the empty string
    /// included. The input lands in the search log and the history display
    /// before the lookup settles, whatever the lookup goes on to do.
    pub async fn submit(&mut self, location: &str) -> SearchOutcome {
        if let Err(err) = self.log.append(location) {
            tracing::warn!(error = %err, "failed to record search");
        }
        self.refresh_history();

        match self.lookup.lookup(location).await {
            Ok(LookupOutcome::Found(report)) => {
                tracing::info!(
                    name = %report.name,
                    lat = report.lat,
                    long = report.long,
                    "lookup hit"
                );
                self.map.recenter(report.lat, report.long, MARKER_ZOOM);
                let popup = map::weather_popup(&report);
                self.map.add_marker(report.lat, report.long, popup);
                SearchOutcome::Marked
            }
            Ok(LookupOutcome::NotFound) => {
                tracing::info!(%location, "endpoint could not resolve location");
                self.page.show_alert("Location not found");
                SearchOutcome::NotFound
            }
            Err(err) => {
                tracing::error!(error = %err, "weather lookup failed");
                self.page.show_alert(&format!("Error: {err}"));
                SearchOutcome::Failed
            }
        }
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    pub fn log(&self) -> &SearchLog {
        &self.log
    }

    pub fn page(&self) -> &P {
        &self.page
    }
}
