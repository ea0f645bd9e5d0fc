//! Scan command implementation.

use device_finder_core::registry::filter;
use device_finder_core::types::DiscoveredDevice;

use crate::cli::ScanArgs;
use crate::commands::{build_client, scan_spinner};
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the scan command
pub async fn run_scan(
    args: ScanArgs,
    api_url: &str,
    timeout_ms: u64,
    json: bool,
) -> Result<(), CliError> {
    let formatter = get_formatter(json);
    let client = build_client(api_url, timeout_ms)?;
    let method = args.method.to_method();

    let spinner = scan_spinner(format!("Scanning ({})...", method));
    let result = client.scan(method).await;
    spinner.finish_and_clear();

    let found = apply_filter(result?, args.filter.as_deref());

    println!("{}", formatter.format_discovered(&found));

    if found.is_empty() {
        return Err(CliError::NoDevicesFound);
    }

    Ok(())
}

/// Keep only devices whose name matches the filter, if one was given.
pub(crate) fn apply_filter(
    devices: Vec<DiscoveredDevice>,
    query: Option<&str>,
) -> Vec<DiscoveredDevice> {
    match query {
        Some(query) => devices
            .into_iter()
            .filter(|d| filter::matches(&d.name, query))
            .collect(),
        None => devices,
    }
}
