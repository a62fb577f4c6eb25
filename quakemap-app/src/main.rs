use quakemap::{
    core::geo::{LatLng, Point},
    feed::{FeedEvent, FeedFetcher},
    layers::{base::TileLayer, overlay::OverlayLayer},
    ui::{canvas::MapCanvas, layer_control::LayerControl, popup::PopupManager},
    Map,
};
use std::time::Duration;

/// Standalone earthquake map viewer application
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Quakemap - Earthquake Map Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "quakemap-app",
        options,
        Box::new(|cc| Box::new(QuakemapApp::new(cc))),
    )?;

    Ok(())
}

/// The main application struct
struct QuakemapApp {
    map: Map,
    popups: PopupManager,
    feeds: FeedFetcher,
}

impl QuakemapApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // World view centered on (20, 0) at zoom 2
        let mut map = Map::new(LatLng::new(20.0, 0.0), 2.0, Point::new(1200.0, 800.0));

        map.layers.add_base_layer(TileLayer::basemap());
        map.layers.add_base_layer(TileLayer::streets());
        map.layers.add_base_layer(TileLayer::dark());

        // The earthquake overlay is visible from the start; the plate
        // overlay is attached once its feed arrives.
        map.layers
            .add_overlay(OverlayLayer::new("earthquakes", "Earthquakes"));
        map.layers.add_overlay(
            OverlayLayer::new("tectonic-plates", "Tectonic Plates").with_visible(false),
        );

        let feeds = FeedFetcher::new();
        feeds.spawn();

        Self {
            map,
            popups: PopupManager::new(),
            feeds,
        }
    }

    fn apply_feed_events(&mut self) {
        for event in self.feeds.try_recv_events() {
            match event {
                FeedEvent::EarthquakesLoaded(markers) => {
                    if let Some(overlay) = self.map.layers.overlay_mut("earthquakes") {
                        overlay.set_markers(markers);
                    }
                }
                FeedEvent::PlatesLoaded(polylines) => {
                    if let Some(overlay) = self.map.layers.overlay_mut("tectonic-plates") {
                        overlay.set_polylines(polylines);
                        overlay.set_visible(true);
                    }
                }
                FeedEvent::FitEarthquakeBounds => {
                    self.map.fit_overlay_bounds("earthquakes");
                }
            }
        }
    }
}

impl eframe::App for QuakemapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_feed_events();

        egui::SidePanel::right("layer_panel")
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Layers");
                ui.separator();
                LayerControl::show(ui, &mut self.map.layers);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            MapCanvas::new(&mut self.map, &mut self.popups).show(ui);
        });

        // Keep polling the feed channel and the deferred bounds fit
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
