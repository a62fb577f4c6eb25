use serde::{Deserialize, Serialize};

/// Describes a tile-based base layer: URL template, attribution, and the
/// background tint the canvas paints while tiles are delegated to a tile
/// engine. Exactly one base layer is visible at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    id: String,
    name: String,
    url_template: String,
    attribution: String,
    background: String,
    subdomains: Vec<String>,
}

impl TileLayer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url_template: impl Into<String>,
        attribution: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url_template: url_template.into(),
            attribution: attribution.into(),
            background: "#dddddd".to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        }
    }

    /// Sets the background tint painted behind the layer
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// The default OpenStreetMap base layer
    pub fn basemap() -> Self {
        Self::new(
            "basemap",
            "Basemap",
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            "© OpenStreetMap contributors",
        )
    }

    /// The alternate OSM humanitarian street layer
    pub fn streets() -> Self {
        Self::new(
            "streets",
            "Streets",
            "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png",
            "© OpenStreetMap contributors, HOT",
        )
        .with_background("#f2efe9")
    }

    /// The CARTO dark base layer
    pub fn dark() -> Self {
        Self::new(
            "dark",
            "Dark Mode",
            "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
            "© CARTO",
        )
        .with_background("#262626")
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    /// Builds the tile URL for the given slippy-map coordinate, rotating
    /// subdomains the way Leaflet does
    pub fn tile_url(&self, x: u32, y: u32, z: u8) -> String {
        let sub = if self.subdomains.is_empty() {
            ""
        } else {
            let idx = ((x + y) as usize) % self.subdomains.len();
            &self.subdomains[idx]
        };

        self.url_template
            .replace("{s}", sub)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{r}", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_url_substitution() {
        let layer = TileLayer::basemap();
        let url = layer.tile_url(1, 2, 3);
        assert_eq!(url, "https://b.tile.openstreetmap.org/3/1/2.png");
    }

    #[test]
    fn test_retina_placeholder_stripped() {
        let layer = TileLayer::dark();
        let url = layer.tile_url(0, 0, 0);
        assert_eq!(url, "https://a.basemaps.cartocdn.com/dark_all/0/0/0.png");
    }

    #[test]
    fn test_base_layer_identities() {
        assert_eq!(TileLayer::basemap().id(), "basemap");
        assert_eq!(TileLayer::streets().name(), "Streets");
        assert_eq!(TileLayer::dark().name(), "Dark Mode");
    }
}
