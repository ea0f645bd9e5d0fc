//! Password protection commands.
//!
//! The password map lives only in memory; protecting a device gates its
//! edit and delete actions until the session ends.

use device_finder_core::types::Device;
use tauri::{AppHandle, State};

use crate::commands::devices::emit_devices_updated;
use crate::error::AppError;
use crate::state::AppState;

/// Register a password for a device and mark it protected.
#[tauri::command]
pub async fn protect_device(
    id: String,
    password: String,
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<Device, AppError> {
    let device = {
        let mut devices = state.devices.write().await;
        let mut vault = state.passwords.write().await;

        // Reject unknown ids before touching the vault
        if devices.get(&id).is_none() {
            return Err(AppError::NotFound(id));
        }

        vault.protect(&id, &password).map_err(AppError::from)?;
        devices.set_protected(&id, true).map_err(AppError::from)?
    };

    emit_devices_updated(&app, &state).await;
    Ok(device)
}

/// Remove protection from a device; requires the current password.
#[tauri::command]
pub async fn unprotect_device(
    id: String,
    password: String,
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<Device, AppError> {
    let device = {
        let mut devices = state.devices.write().await;
        let mut vault = state.passwords.write().await;

        vault.unprotect(&id, &password).map_err(AppError::from)?;
        devices.set_protected(&id, false).map_err(AppError::from)?
    };

    emit_devices_updated(&app, &state).await;
    Ok(device)
}

/// Check a password without changing anything. Errors with a mismatch so
/// the frontend can show the blocking dialog.
#[tauri::command]
pub async fn verify_device_password(
    id: String,
    password: String,
    state: State<'_, AppState>,
) -> Result<(), AppError> {
    let vault = state.passwords.read().await;
    vault.verify(&id, &password).map_err(AppError::from)
}
