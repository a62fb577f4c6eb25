use crate::layers::{base::TileLayer, overlay::OverlayLayer};

/// Holds the session-lived layer set: mutually-exclusive base layers and
/// independently toggleable overlays. Layers are registered once at startup
/// and never removed.
pub struct LayerRegistry {
    base_layers: Vec<TileLayer>,
    active_base: usize,
    overlays: Vec<OverlayLayer>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self {
            base_layers: Vec::new(),
            active_base: 0,
            overlays: Vec::new(),
        }
    }

    /// Registers a base layer; the first one registered becomes active
    pub fn add_base_layer(&mut self, layer: TileLayer) {
        self.base_layers.push(layer);
    }

    /// Registers an overlay group
    pub fn add_overlay(&mut self, overlay: OverlayLayer) {
        self.overlays.push(overlay);
    }

    pub fn base_layers(&self) -> &[TileLayer] {
        &self.base_layers
    }

    pub fn active_base_index(&self) -> usize {
        self.active_base
    }

    /// The currently visible base layer, if any are registered
    pub fn active_base(&self) -> Option<&TileLayer> {
        self.base_layers.get(self.active_base)
    }

    /// Switches the active base layer; out-of-range indices are ignored so
    /// exactly one base layer stays visible
    pub fn set_active_base(&mut self, index: usize) {
        if index < self.base_layers.len() {
            self.active_base = index;
        }
    }

    pub fn overlays(&self) -> &[OverlayLayer] {
        &self.overlays
    }

    pub fn overlays_mut(&mut self) -> impl Iterator<Item = &mut OverlayLayer> {
        self.overlays.iter_mut()
    }

    pub fn overlay(&self, id: &str) -> Option<&OverlayLayer> {
        self.overlays.iter().find(|o| o.id() == id)
    }

    pub fn overlay_mut(&mut self, id: &str) -> Option<&mut OverlayLayer> {
        self.overlays.iter_mut().find(|o| o.id() == id)
    }
}

impl Default for LayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
