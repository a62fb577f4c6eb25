use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// GeoJSON geometry. Point coordinates are kept as a raw array because the
/// earthquake feed uses a third component for depth and some records carry
/// only two components; validation happens at placement time, not parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Vec<f64>,
    },
    LineString {
        coordinates: Vec<Vec<f64>>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
}

impl Geometry {
    /// Flattens line and polygon geometry into lat/lng paths. Point
    /// geometry yields no paths; coordinate order is GeoJSON (lon, lat).
    pub fn line_paths(&self) -> Vec<Vec<LatLng>> {
        fn path(coords: &[Vec<f64>]) -> Vec<LatLng> {
            coords
                .iter()
                .filter(|c| c.len() >= 2)
                .map(|c| LatLng::new(c[1], c[0]))
                .collect()
        }

        match self {
            Geometry::Point { .. } => Vec::new(),
            Geometry::LineString { coordinates } => vec![path(coordinates)],
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                coordinates.iter().map(|line| path(line)).collect()
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter().map(|ring| path(ring)))
                .collect(),
        }
    }
}

/// One GeoJSON feature: geometry plus free-form properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: Option<serde_json::Value>,
    pub geometry: Option<Geometry>,
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

impl Feature {
    /// Reads a numeric property
    pub fn property_f64(&self, key: &str) -> Option<f64> {
        self.properties
            .as_ref()
            .and_then(|props| props.get(key))
            .and_then(|value| value.as_f64())
    }

    /// Reads a string property
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|props| props.get(key))
            .and_then(|value| value.as_str())
    }
}

/// Root document of both feeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parses a GeoJSON feature collection from raw JSON
    pub fn from_str(geojson: &str) -> crate::Result<Self> {
        serde_json::from_str(geojson)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point_with_depth() {
        let geojson = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": "us7000abcd",
                    "properties": {"mag": 4.5, "place": "10km N of Somewhere"},
                    "geometry": {
                        "type": "Point",
                        "coordinates": [-122.4194, 37.7749, 12.3]
                    }
                }
            ]
        }
        "#;

        let collection = FeatureCollection::from_str(geojson).unwrap();
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        assert_eq!(feature.property_f64("mag"), Some(4.5));
        assert_eq!(feature.property_str("place"), Some("10km N of Somewhere"));
        match &feature.geometry {
            Some(Geometry::Point { coordinates }) => {
                assert_eq!(coordinates, &vec![-122.4194, 37.7749, 12.3]);
            }
            other => panic!("unexpected geometry: {:?}", other),
        }
    }

    #[test]
    fn test_parse_two_component_point() {
        let geojson = r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {"type": "Point", "coordinates": [-120.0, 45.0]}
                }
            ]
        }
        "#;

        let collection = FeatureCollection::from_str(geojson).unwrap();
        match &collection.features[0].geometry {
            Some(Geometry::Point { coordinates }) => assert_eq!(coordinates.len(), 2),
            other => panic!("unexpected geometry: {:?}", other),
        }
    }

    #[test]
    fn test_line_paths_from_linestring() {
        let geometry = Geometry::LineString {
            coordinates: vec![vec![-74.0, 40.7], vec![-73.9, 40.8]],
        };

        let paths = geometry.line_paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0][0], LatLng::new(40.7, -74.0));
        assert_eq!(paths[0][1], LatLng::new(40.8, -73.9));
    }

    #[test]
    fn test_line_paths_from_multilinestring() {
        let geometry = Geometry::MultiLineString {
            coordinates: vec![
                vec![vec![0.0, 0.0], vec![1.0, 1.0]],
                vec![vec![2.0, 2.0], vec![3.0, 3.0]],
            ],
        };

        assert_eq!(geometry.line_paths().len(), 2);
    }

    #[test]
    fn test_invalid_document_is_a_parse_error() {
        let err = FeatureCollection::from_str("{not json").unwrap_err();
        assert!(matches!(err, crate::Error::ParseError(_)));
    }
}
