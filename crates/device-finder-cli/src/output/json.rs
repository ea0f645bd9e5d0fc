//! JSON-formatted output for CLI.

use serde::Serialize;
use serde_json::json;

use device_finder_core::types::{Device, DeviceSections, DiscoveredDevice};

use super::OutputFormatter;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_discovered(&self, devices: &[DiscoveredDevice]) -> String {
        let output = json!({
            "devices": devices,
            "count": devices.len()
        });
        Self::to_json(&output)
    }

    fn format_devices(&self, devices: &[Device]) -> String {
        let output = json!({
            "devices": devices,
            "count": devices.len()
        });
        Self::to_json(&output)
    }

    fn format_sections(&self, sections: &DeviceSections) -> String {
        let output = json!({
            "favorites": sections.favorites,
            "online": sections.online,
            "offline": sections.offline,
            "count": sections.len()
        });
        Self::to_json(&output)
    }

    fn format_message(&self, message: &str) -> String {
        Self::to_json(&json!({ "message": message }))
    }

    fn format_error(&self, error: &str) -> String {
        Self::to_json(&json!({ "error": error }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovered_json_shape() {
        let devices = vec![DiscoveredDevice {
            id: "wifi_0".to_string(),
            name: "HomeNet".to_string(),
            kind: "📡".to_string(),
            address: Some("AA:BB:CC:00:11:22".to_string()),
            signal: Some("70%".to_string()),
            security: None,
            index: None,
        }];

        let output = JsonOutput::new().format_discovered(&devices);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["devices"][0]["id"], "wifi_0");
    }

    #[test]
    fn test_sections_json_shape() {
        let output = JsonOutput::new().format_sections(&DeviceSections::default());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 0);
        assert!(value["favorites"].as_array().unwrap().is_empty());
    }
}
