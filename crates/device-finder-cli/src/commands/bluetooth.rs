//! Bluetooth listing command.

use crate::cli::BluetoothArgs;
use crate::commands::{build_client, scan_spinner};
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the bluetooth command.
///
/// The default view is the combined one: paired devices first, then
/// whatever is currently visible, deduplicated by address. Both requests
/// must succeed for the combined view.
pub async fn run_bluetooth(
    args: BluetoothArgs,
    api_url: &str,
    timeout_ms: u64,
    json: bool,
) -> Result<(), CliError> {
    let formatter = get_formatter(json);
    let client = build_client(api_url, timeout_ms)?;

    let spinner = scan_spinner("Scanning Bluetooth devices...".to_string());
    let result = if args.paired_only {
        client.bluetooth_paired().await
    } else if args.available_only {
        client.bluetooth_available().await
    } else {
        client.scan_bluetooth_full().await
    };
    spinner.finish_and_clear();

    let found = result?;

    println!("{}", formatter.format_discovered(&found));

    if found.is_empty() {
        return Err(CliError::NoDevicesFound);
    }

    Ok(())
}
