//! Common test utilities and fixtures
#![allow(dead_code)]

use anyhow::Result;
use axum::Router;
use calamine::{open_workbook_from_rs, Reader, Xlsx};
use kiosk_core::UserStore;
use kiosk_server::{
    config::CorsSettings, cors_layer, create_router, services::export::SHEET_NAME, AppState,
    BroadcastHub, SpreadsheetExporter,
};
use kiosk_storage::SqliteUserStore;
use std::io::Cursor;
use std::sync::Arc;
use tempfile::TempDir;

/// Origin the test router accepts
pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// Create a file-backed test store; keep the `TempDir` alive for the test
pub async fn create_test_store() -> Result<(Arc<SqliteUserStore>, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("users.db");
    let store = SqliteUserStore::open(&format!("sqlite://{}", db_path.display())).await?;
    Ok((Arc::new(store), temp_dir))
}

/// Router wired the same way `serve` wires it, around any store
pub fn create_test_app(store: Arc<dyn UserStore>) -> (Router, Arc<BroadcastHub>) {
    let hub = Arc::new(BroadcastHub::new(16));
    let app_state = AppState::new(
        store,
        Arc::clone(&hub),
        Arc::new(SpreadsheetExporter::new()),
    );

    let cors = cors_layer(&CorsSettings {
        allowed_origin: TEST_ORIGIN.to_string(),
    })
    .expect("test origin is valid");

    (create_router(app_state, cors), hub)
}

/// Read the users sheet back as rows of displayed cell text
pub fn read_sheet(document: &[u8]) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(Cursor::new(document.to_vec())).expect("document is valid XLSX");

    let range = workbook
        .worksheet_range(SHEET_NAME)
        .expect("document has a Users sheet");

    range
        .rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

/// Header row every export starts with
pub fn header_row() -> Vec<String> {
    ["ID", "Name", "Email", "Timestamp"]
        .iter()
        .map(ToString::to_string)
        .collect()
}
