//! Discovery commands.
//!
//! Scans go through the external `/api/devices/*` backend; nothing here
//! probes hardware. Results are returned to the frontend for rendering
//! and only enter the sidebar through an explicit import.

use device_finder_core::types::{Device, DiscoveredDevice, ScanMethod};
use tauri::{AppHandle, Emitter, State};

use crate::commands::devices::emit_devices_updated;
use crate::error::AppError;
use crate::state::AppState;

/// Run a scan for the given method and return the raw results.
#[tauri::command]
pub async fn scan_devices(
    method: ScanMethod,
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<Vec<DiscoveredDevice>, AppError> {
    let found = state
        .scanner
        .scan(method)
        .await
        .map_err(AppError::from)?;

    let _ = app.emit(
        "scan-complete",
        serde_json::json!({
            "method": method.as_str(),
            "count": found.len(),
        }),
    );

    Ok(found)
}

/// Combined Bluetooth listing: paired first, then currently visible,
/// deduplicated by address. Fails as a unit if either request fails.
#[tauri::command]
pub async fn scan_bluetooth(
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<Vec<DiscoveredDevice>, AppError> {
    let found = state
        .scanner
        .scan_bluetooth_full()
        .await
        .map_err(AppError::from)?;

    let _ = app.emit(
        "scan-complete",
        serde_json::json!({
            "method": "bluetooth",
            "count": found.len(),
        }),
    );

    Ok(found)
}

/// Add scan results to the sidebar.
///
/// Re-imported ids keep their favorite and protected flags.
#[tauri::command]
pub async fn import_discovered(
    devices: Vec<DiscoveredDevice>,
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<Vec<Device>, AppError> {
    let imported = {
        let mut registry = state.devices.write().await;
        devices
            .into_iter()
            .map(|discovered| registry.import(discovered))
            .collect()
    };

    emit_devices_updated(&app, &state).await;
    Ok(imported)
}
