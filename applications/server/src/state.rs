/// Shared application state
use crate::services::{BroadcastHub, SpreadsheetExporter};
use kiosk_core::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Everything here is created by the process at startup and handed to the
/// router; nothing is reachable through globals.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub hub: Arc<BroadcastHub>,
    pub exporter: Arc<SpreadsheetExporter>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UserStore>,
        hub: Arc<BroadcastHub>,
        exporter: Arc<SpreadsheetExporter>,
    ) -> Self {
        Self {
            store,
            hub,
            exporter,
        }
    }
}
