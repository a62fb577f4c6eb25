//! Async plumbing between the feed pipelines and the UI thread.
//!
//! The two feeds are fetched by independent tokio tasks; completed results
//! cross back to the egui thread over a crossbeam channel and are drained
//! once per frame. A stalled or failing fetch simply never delivers its
//! layer; there is no retry and no user-visible error surface.

use crate::{
    layers::overlay::{CircleMarker, Polyline},
    plates, quakes,
};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::time::Duration;

/// Delay before the one-shot deferred bounds fit after earthquake data
/// arrives. Not synchronized with render completion; best-effort UX.
pub const BOUNDS_FIT_DELAY: Duration = Duration::from_secs(1);

/// Events delivered from the background fetch tasks to the UI
#[derive(Debug)]
pub enum FeedEvent {
    /// Earthquake markers, already validated and styled
    EarthquakesLoaded(Vec<CircleMarker>),
    /// Plate boundary polylines
    PlatesLoaded(Vec<Polyline>),
    /// The deferred bounds fit is due
    FitEarthquakeBounds,
}

/// Owns the event channel and spawns the feed fetch tasks
pub struct FeedFetcher {
    event_tx: Sender<FeedEvent>,
    event_rx: Receiver<FeedEvent>,
}

impl FeedFetcher {
    pub fn new() -> Self {
        let (event_tx, event_rx) = unbounded();
        Self { event_tx, event_rx }
    }

    /// Launches both feed fetches as independent tasks. Neither waits on
    /// the other; each delivers its layer whenever it completes. The
    /// earthquake task also schedules the one-shot deferred bounds fit.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self) {
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            match quakes::fetch().await {
                Ok(collection) => {
                    let markers = quakes::place_markers(&collection);
                    log::info!("earthquake feed loaded: {} markers", markers.len());
                    let _ = tx.send(FeedEvent::EarthquakesLoaded(markers));

                    tokio::time::sleep(BOUNDS_FIT_DELAY).await;
                    let _ = tx.send(FeedEvent::FitEarthquakeBounds);
                }
                Err(err) => log::warn!("earthquake feed fetch failed: {}", err),
            }
        });

        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            match plates::fetch().await {
                Ok(collection) => {
                    let polylines = plates::build_polylines(&collection);
                    log::info!("plate boundary feed loaded: {} polylines", polylines.len());
                    let _ = tx.send(FeedEvent::PlatesLoaded(polylines));
                }
                Err(err) => log::warn!("tectonic plate feed fetch failed: {}", err),
            }
        });
    }

    /// Drains all events that arrived since the last call (non-blocking)
    pub fn try_recv_events(&self) -> Vec<FeedEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Sender half, usable from tests or custom pipelines
    pub fn sender(&self) -> Sender<FeedEvent> {
        self.event_tx.clone()
    }
}

impl Default for FeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}
