use crate::layers::registry::LayerRegistry;
use egui::Ui;

/// The layer-switcher control: radio buttons for the mutually-exclusive
/// base layers, checkboxes for the toggleable overlays
pub struct LayerControl;

impl LayerControl {
    pub fn show(ui: &mut Ui, registry: &mut LayerRegistry) {
        ui.label("Base layers");
        let mut active = registry.active_base_index();
        for (index, layer) in registry.base_layers().iter().enumerate() {
            ui.radio_value(&mut active, index, layer.name());
        }
        registry.set_active_base(active);

        ui.separator();
        ui.label("Overlays");
        for overlay in registry.overlays_mut() {
            let mut visible = overlay.is_visible();
            ui.checkbox(&mut visible, overlay.name().to_string());
            overlay.set_visible(visible);
        }
    }
}
