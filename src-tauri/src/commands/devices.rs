//! Device-related Tauri commands.
//!
//! These back the sidebar and its dialogs: listing and sectioning,
//! add/edit/delete, and the favorite/status toggles. Every mutation emits
//! a `devices-updated` event carrying the fresh section view so the
//! frontend re-renders without polling.

use device_finder_core::types::{Device, DeviceSections, DeviceUpdate, NewDevice};
use device_finder_core::PasswordVault;
use tauri::{AppHandle, Emitter, State};

use crate::error::AppError;
use crate::state::AppState;

/// Emit the current section view to the frontend.
pub(crate) async fn emit_devices_updated(app: &AppHandle, state: &AppState) {
    let sections = state.devices.read().await.sections("");
    let _ = app.emit("devices-updated", &sections);
}

/// Password gate for device removal.
///
/// Unprotected devices are removable without a password; protected ones
/// require the correct one, and a missing password counts as a mismatch.
pub(crate) fn check_removal_password(
    vault: &PasswordVault,
    id: &str,
    password: Option<&str>,
) -> Result<(), AppError> {
    if !vault.is_protected(id) {
        return Ok(());
    }

    let password = password.ok_or_else(|| AppError::PasswordMismatch(id.to_string()))?;
    vault.verify(id, password).map_err(AppError::from)
}

/// Get all devices, sorted for display.
#[tauri::command]
pub async fn get_devices(state: State<'_, AppState>) -> Result<Vec<Device>, AppError> {
    let devices = state.devices.read().await;
    Ok(devices.all())
}

/// Get a specific device by id.
#[tauri::command]
pub async fn get_device(
    id: String,
    state: State<'_, AppState>,
) -> Result<Option<Device>, AppError> {
    let devices = state.devices.read().await;
    Ok(devices.get(&id))
}

/// Get the sidebar section view, filtered by the live search query.
#[tauri::command]
pub async fn get_sections(
    filter: Option<String>,
    state: State<'_, AppState>,
) -> Result<DeviceSections, AppError> {
    let devices = state.devices.read().await;
    Ok(devices.sections(filter.as_deref().unwrap_or("")))
}

/// Add a device from the add-device dialog.
#[tauri::command]
pub async fn add_device(
    device: NewDevice,
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<Device, AppError> {
    let added = {
        let mut devices = state.devices.write().await;
        devices.add(device).map_err(AppError::from)?
    };

    emit_devices_updated(&app, &state).await;
    Ok(added)
}

/// Apply an edit-dialog update.
#[tauri::command]
pub async fn update_device(
    id: String,
    update: DeviceUpdate,
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<Device, AppError> {
    let updated = {
        let mut devices = state.devices.write().await;
        devices.update(&id, update).map_err(AppError::from)?
    };

    emit_devices_updated(&app, &state).await;
    Ok(updated)
}

/// Remove a device, checking its password when it is protected.
///
/// The password entry is dropped together with the device.
#[tauri::command]
pub async fn remove_device(
    id: String,
    password: Option<String>,
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<Device, AppError> {
    let removed = {
        let mut devices = state.devices.write().await;
        let mut vault = state.passwords.write().await;

        check_removal_password(&vault, &id, password.as_deref())?;

        let removed = devices.remove(&id).map_err(AppError::from)?;
        vault.remove_entry(&id);
        removed
    };

    emit_devices_updated(&app, &state).await;
    Ok(removed)
}

/// Pin or unpin a device from the Favorites section.
#[tauri::command]
pub async fn toggle_favorite(
    id: String,
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<Device, AppError> {
    let device = {
        let mut devices = state.devices.write().await;
        devices.toggle_favorite(&id).map_err(AppError::from)?
    };

    emit_devices_updated(&app, &state).await;
    Ok(device)
}

/// Flip a device between online and offline.
#[tauri::command]
pub async fn toggle_status(
    id: String,
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<Device, AppError> {
    let device = {
        let mut devices = state.devices.write().await;
        devices.toggle_status(&id).map_err(AppError::from)?
    };

    emit_devices_updated(&app, &state).await;
    Ok(device)
}

/// Clear the sidebar. Passwords go with the devices they protect.
#[tauri::command]
pub async fn clear_devices(
    state: State<'_, AppState>,
    app: AppHandle,
) -> Result<(), AppError> {
    {
        let mut devices = state.devices.write().await;
        let mut vault = state.passwords.write().await;
        devices.clear();
        vault.clear();
    }

    emit_devices_updated(&app, &state).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_allowed_for_unprotected_device() {
        let vault = PasswordVault::new();
        assert!(check_removal_password(&vault, "manual_1", None).is_ok());
        assert!(check_removal_password(&vault, "manual_1", Some("anything")).is_ok());
    }

    #[test]
    fn test_removal_requires_password_when_protected() {
        let mut vault = PasswordVault::new();
        vault.protect("manual_1", "s3cret").unwrap();

        let err = check_removal_password(&vault, "manual_1", None).unwrap_err();
        assert!(matches!(err, AppError::PasswordMismatch(_)));
    }

    #[test]
    fn test_removal_rejects_wrong_password() {
        let mut vault = PasswordVault::new();
        vault.protect("manual_1", "s3cret").unwrap();

        let err = check_removal_password(&vault, "manual_1", Some("wrong")).unwrap_err();
        assert!(matches!(err, AppError::PasswordMismatch(_)));

        assert!(check_removal_password(&vault, "manual_1", Some("s3cret")).is_ok());
    }
}
