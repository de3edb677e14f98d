//! Core library for the `weathermap` search tool.
//!
//! This crate defines:
//! - Configuration handling (lookup endpoint, initial viewport)
//! - The remote weather lookup client
//! - The map view and its Leaflet page rendering
//! - The persistent search log and the controller gluing them together
//!
//! It is used by `weathermap-cli`, but can also be reused by other front ends.

pub mod config;
pub mod controller;
pub mod error;
pub mod lookup;
pub mod map;
pub mod model;
pub mod store;

pub use config::{Config, MapConfig};
pub use controller::{SearchController, SearchOutcome, SearchPage};
pub use error::LookupError;
pub use lookup::{HttpLookup, WeatherLookup};
pub use map::{LatLng, MapView, Marker};
pub use model::{LookupOutcome, WeatherReport};
pub use store::{FileStore, KeyValueStore, MemoryStore, SearchLog};
