//! Tectonic plate boundary pipeline: fetch the PB2002 boundary feed and
//! render every feature as a fixed-style dashed polyline. Geometry is
//! assumed well-formed; there is no per-feature validation and no popups.

use crate::{
    data::geojson::FeatureCollection,
    layers::overlay::{LineStyle, Polyline},
    Result,
};

/// Static tectonic plate boundary feed (PB2002)
pub const FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Fixed boundary styling: orange, width 2, opacity 0.8, dashed
pub fn boundary_style() -> LineStyle {
    LineStyle {
        color: "#ffa500".to_string(),
        width: 2.0,
        opacity: 0.8,
        dash_pattern: vec![3.0, 3.0],
    }
}

/// One-shot fetch of the plate boundary feed
pub async fn fetch() -> Result<FeatureCollection> {
    let collection = reqwest::get(FEED_URL)
        .await?
        .error_for_status()?
        .json::<FeatureCollection>()
        .await?;
    Ok(collection)
}

/// Turns every feature of the feed into styled polylines
pub fn build_polylines(collection: &FeatureCollection) -> Vec<Polyline> {
    collection
        .features
        .iter()
        .filter_map(|feature| feature.geometry.as_ref())
        .flat_map(|geometry| geometry.line_paths())
        .filter(|path| !path.is_empty())
        .map(|points| Polyline::new(points, boundary_style()))
        .collect()
}
