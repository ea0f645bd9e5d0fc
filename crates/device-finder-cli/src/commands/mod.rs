//! Command implementations.

mod bluetooth;
mod list;
mod scan;

pub use bluetooth::run_bluetooth;
pub use list::run_list;
pub use scan::run_scan;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use device_finder_core::ScanClient;

use crate::error::CliError;

/// Build a scan client from the global CLI flags.
pub(crate) fn build_client(api_url: &str, timeout_ms: u64) -> Result<ScanClient, CliError> {
    ScanClient::with_timeout(api_url, Duration::from_millis(timeout_ms)).map_err(CliError::from)
}

/// Spinner shown while a scan request is in flight. Draws to stderr, so
/// JSON output on stdout stays clean.
pub(crate) fn scan_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
