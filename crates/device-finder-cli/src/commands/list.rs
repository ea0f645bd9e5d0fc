//! Sidebar view command.
//!
//! Scans, imports the results into an in-process registry and prints the
//! same Favorites / Online / Offline view the dashboard renders. The
//! registry only lives for this invocation.

use device_finder_core::registry::filter;
use device_finder_core::DeviceRegistry;

use crate::cli::ListArgs;
use crate::commands::{build_client, scan_spinner};
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the list command
pub async fn run_list(
    args: ListArgs,
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

    let mut registry = DeviceRegistry::new();
    for discovered in result? {
        registry.import(discovered);
    }

    let query = args.filter.as_deref().unwrap_or("");

    if args.flat {
        let devices: Vec<_> = registry
            .all()
            .into_iter()
            .filter(|d| filter::matches(&d.name, query))
            .collect();

        println!("{}", formatter.format_devices(&devices));

        if devices.is_empty() {
            return Err(CliError::NoDevicesFound);
        }
    } else {
        let sections = registry.sections(query);

        println!("{}", formatter.format_sections(&sections));

        if sections.is_empty() {
            return Err(CliError::NoDevicesFound);
        }
    }

    Ok(())
}
