//! Device Finder - Rust Backend
//!
//! This crate provides the Tauri backend for the Device Finder desktop
//! application. It holds the in-memory device registry and password map,
//! talks to the external discovery API, and exposes Tauri commands for
//! the dashboard frontend.

pub mod commands;
pub mod error;
pub mod state;

use device_finder_core::scan::DEFAULT_API_URL;
use device_finder_core::ScanClient;
use state::AppState;

/// Environment variable overriding the discovery API base URL
const API_URL_ENV: &str = "DEVICE_FINDER_API_URL";

/// Run the Tauri application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            use tauri::Manager;

            let api_url =
                std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
            println!("Discovery API base URL: {}", api_url);

            let scanner = ScanClient::new(api_url).expect("Failed to build scan client");

            app.manage(AppState::new(scanner));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::devices::get_devices,
            commands::devices::get_device,
            commands::devices::get_sections,
            commands::devices::add_device,
            commands::devices::update_device,
            commands::devices::remove_device,
            commands::devices::toggle_favorite,
            commands::devices::toggle_status,
            commands::devices::clear_devices,
            commands::scan::scan_devices,
            commands::scan::scan_bluetooth,
            commands::scan::import_discovered,
            commands::protection::protect_device,
            commands::protection::unprotect_device,
            commands::protection::verify_device_password,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
