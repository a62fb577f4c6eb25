//! Earthquake feed pipeline: fetch the USGS weekly GeoJSON feed, validate
//! each feature, and turn the valid ones into styled circle markers.

use crate::{
    core::geo::LatLng,
    data::geojson::{Feature, FeatureCollection, Geometry},
    layers::overlay::{CircleMarker, MarkerStyle},
    style::{depth_color, magnitude_radius},
    Result,
};

/// Rolling "all earthquakes this week" USGS feed
pub const FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// One-shot fetch of the earthquake feed
pub async fn fetch() -> Result<FeatureCollection> {
    let collection = reqwest::get(FEED_URL)
        .await?
        .error_for_status()?
        .json::<FeatureCollection>()
        .await?;
    Ok(collection)
}

/// Places every valid feature of the feed as a styled circle marker.
///
/// Malformed features (missing point geometry, fewer than two coordinate
/// components, or out-of-range latitude/longitude) are logged and skipped
/// without aborting the batch.
pub fn place_markers(collection: &FeatureCollection) -> Vec<CircleMarker> {
    collection
        .features
        .iter()
        .filter_map(place_feature)
        .collect()
}

fn place_feature(feature: &Feature) -> Option<CircleMarker> {
    let coordinates = match &feature.geometry {
        Some(Geometry::Point { coordinates }) => coordinates,
        _ => {
            log::warn!("Skipping feature without point geometry: {:?}", feature.id);
            return None;
        }
    };

    if coordinates.len() < 2 {
        log::warn!("Skipping invalid data point: {:?}", feature.id);
        return None;
    }

    let position = LatLng::new(coordinates[1], coordinates[0]);
    if !position.is_valid() {
        log::warn!(
            "Skipping out-of-range data point ({}, {}): {:?}",
            position.lat,
            position.lng,
            feature.id
        );
        return None;
    }

    let depth = coordinates.get(2).copied();
    let magnitude = feature.property_f64("mag");
    let place = feature.property_str("place");

    let style = MarkerStyle::earthquake(
        depth_color(depth),
        magnitude_radius(magnitude.unwrap_or(0.0)),
    );

    Some(CircleMarker::new(position, style).with_popup(popup_text(magnitude, place, depth)))
}

/// Popup text bound to each marker; `<br>` separators are rendered as line
/// breaks by the popup widget
fn popup_text(magnitude: Option<f64>, place: Option<&str>, depth: Option<f64>) -> String {
    format!(
        "Magnitude: {}<br>Location: {}<br>Depth: {} km",
        fmt_number(magnitude),
        place.unwrap_or("unknown"),
        fmt_number(depth),
    )
}

fn fmt_number(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "unknown".to_string(),
    }
}
