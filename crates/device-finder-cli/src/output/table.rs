//! Table-formatted output for CLI.

use chrono::{DateTime, Utc};
use colored::*;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use device_finder_core::types::{Device, DeviceKind, DeviceSections, DeviceStatus, DiscoveredDevice};

use super::OutputFormatter;

/// Render a scan timestamp for the Last Seen column.
fn format_last_seen(last_seen: Option<DateTime<Utc>>) -> String {
    last_seen
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }

    fn status_cell(status: DeviceStatus) -> Cell {
        match status {
            DeviceStatus::Online => Cell::new("online").fg(Color::Green),
            DeviceStatus::Offline => Cell::new("offline").fg(Color::Red),
        }
    }

    fn device_table(devices: &[Device]) -> Table {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["ID", "Name", "Type", "Status", "IP", "Address", "Last Seen"]);

        for device in devices {
            let last_seen = format_last_seen(device.last_seen);

            let mut name = device.name.clone();
            if device.favorite {
                name = format!("* {}", name);
            }
            if device.protected {
                name = format!("{} [locked]", name);
            }

            table.add_row(vec![
                Cell::new(&device.id),
                Cell::new(name),
                Cell::new(device.kind.display_name()),
                Self::status_cell(device.status),
                Cell::new(device.ip.as_deref().unwrap_or("-")),
                Cell::new(device.address.as_deref().unwrap_or("-")),
                Cell::new(last_seen),
            ]);
        }

        table
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn format_discovered(&self, devices: &[DiscoveredDevice]) -> String {
        if devices.is_empty() {
            return "No devices found.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["ID", "Name", "Type", "Address", "Signal", "Security"]);

        for device in devices {
            table.add_row(vec![
                Cell::new(&device.id),
                Cell::new(&device.name),
                Cell::new(DeviceKind::from_scan_tag(&device.kind).display_name()),
                Cell::new(device.address.as_deref().unwrap_or("-")),
                Cell::new(device.signal.as_deref().unwrap_or("-")),
                Cell::new(device.security.as_deref().unwrap_or("-")),
            ]);
        }

        format!("{}\n\nFound {} device(s)", table, devices.len())
    }

    fn format_devices(&self, devices: &[Device]) -> String {
        if devices.is_empty() {
            return "No devices found.".to_string();
        }

        format!(
            "{}\n\nFound {} device(s)",
            Self::device_table(devices),
            devices.len()
        )
    }

    fn format_sections(&self, sections: &DeviceSections) -> String {
        let mut parts = Vec::new();

        let groups = [
            ("Favorites", &sections.favorites),
            ("Online", &sections.online),
            ("Offline", &sections.offline),
        ];

        for (title, devices) in groups {
            let header = format!("{} ({})", title, devices.len());
            parts.push(header.bold().to_string());

            if devices.is_empty() {
                parts.push("  (none)".dimmed().to_string());
            } else {
                parts.push(Self::device_table(devices).to_string());
            }
            parts.push(String::new());
        }

        parts.push(format!("Found {} device(s)", sections.len()));
        parts.join("\n")
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("{} {}", "Error:".red(), error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_discovered_list() {
        let output = TableOutput::new().format_discovered(&[]);
        assert_eq!(output, "No devices found.");
    }

    #[test]
    fn test_sections_output_mentions_all_groups() {
        let output = TableOutput::new().format_sections(&DeviceSections::default());
        assert!(output.contains("Favorites (0)"));
        assert!(output.contains("Online (0)"));
        assert!(output.contains("Offline (0)"));
        assert!(output.contains("Found 0 device(s)"));
    }
}
