//! Application state management.
//!
//! This module defines the shared state used across Tauri commands.

use std::sync::Arc;

use device_finder_core::{DeviceRegistry, PasswordVault, ScanClient};
use tokio::sync::RwLock;

/// Shared application state managed by Tauri.
///
/// Lock ordering: commands that need both locks take `devices` before
/// `passwords`.
pub struct AppState {
    /// The sidebar's device registry.
    pub devices: Arc<RwLock<DeviceRegistry>>,
    /// Password map gating sensitive device actions.
    pub passwords: Arc<RwLock<PasswordVault>>,
    /// Client for the external discovery API.
    pub scanner: ScanClient,
}

impl AppState {
    /// Create a new AppState with an empty registry and vault.
    pub fn new(scanner: ScanClient) -> Self {
        Self {
            devices: Arc::new(RwLock::new(DeviceRegistry::new())),
            passwords: Arc::new(RwLock::new(PasswordVault::new())),
            scanner,
        }
    }
}
