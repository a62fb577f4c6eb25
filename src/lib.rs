//! # quakemap
//!
//! An interactive world map that overlays real-time earthquake data and
//! tectonic plate boundaries fetched from public GeoJSON feeds.
//!
//! The library provides the geographic primitives, layer registry, feed
//! pipelines, and egui widgets; the `quakemap-app` binary wires them into a
//! standalone viewer.

pub mod core;
pub mod data;
pub mod feed;
pub mod layers;
pub mod plates;
pub mod quakes;
pub mod style;
pub mod ui;

// Re-export public API
pub use crate::core::{
    geo::{LatLng, LatLngBounds, Point},
    map::Map,
    viewport::Viewport,
};

pub use crate::layers::{
    base::TileLayer,
    overlay::{CircleMarker, OverlayLayer, Polyline},
    registry::LayerRegistry,
};

pub use crate::data::geojson::{Feature, FeatureCollection, Geometry};

pub use crate::feed::{FeedEvent, FeedFetcher};

pub use crate::ui::{canvas::MapCanvas, layer_control::LayerControl, legend::Legend, popup::Popup};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),
}

/// Error type alias for convenience
pub type Error = MapError;
