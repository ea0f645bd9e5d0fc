//! Output formatting for CLI results.

pub mod json;
pub mod table;

pub use json::JsonOutput;
pub use table::TableOutput;

use device_finder_core::types::{Device, DeviceSections, DiscoveredDevice};

/// Output formatter trait
pub trait OutputFormatter {
    /// Format raw scan results
    fn format_discovered(&self, devices: &[DiscoveredDevice]) -> String;

    /// Format registry devices as a flat list
    fn format_devices(&self, devices: &[Device]) -> String;

    /// Format the sidebar section view
    fn format_sections(&self, sections: &DeviceSections) -> String;

    /// Format a generic message
    fn format_message(&self, message: &str) -> String;

    /// Format an error
    fn format_error(&self, error: &str) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}
