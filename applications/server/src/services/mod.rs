/// Server services
pub mod broadcast;
pub mod export;

pub use broadcast::BroadcastHub;
pub use export::SpreadsheetExporter;
