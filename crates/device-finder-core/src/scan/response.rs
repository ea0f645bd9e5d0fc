//! Scan API response parsing.
//!
//! The discovery backend answers either `{"status": "success", "devices":
//! [...]}` or `{"error": "..."}`. Parsing is a standalone function over a
//! byte slice so it can be tested without a socket.

use serde::Deserialize;

use crate::error::ScanError;
use crate::types::DiscoveredDevice;

/// Raw envelope from the scan API.
#[derive(Debug, Deserialize)]
struct ScanEnvelope {
    #[serde(default)]
    devices: Option<Vec<DiscoveredDevice>>,
    #[serde(default)]
    error: Option<String>,
}

/// Parse a scan response body into discovered devices.
///
/// An `error` field takes precedence over any device list: the backend
/// only sets it when the scan itself failed.
pub fn parse_scan_response(data: &[u8]) -> Result<Vec<DiscoveredDevice>, ScanError> {
    let envelope: ScanEnvelope = serde_json::from_slice(data).map_err(|e| ScanError::Parse {
        message: e.to_string(),
    })?;

    if let Some(message) = envelope.error {
        return Err(ScanError::Api { message });
    }

    envelope.devices.ok_or_else(|| ScanError::Parse {
        message: "response contained neither devices nor error".to_string(),
    })
}

/// Drop duplicate records that share an address, keeping the first
/// occurrence. Records without an address are always kept.
pub fn dedup_by_address(devices: Vec<DiscoveredDevice>) -> Vec<DiscoveredDevice> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::with_capacity(devices.len());

    for device in devices {
        match &device.address {
            Some(address) => {
                if seen.insert(address.clone()) {
                    unique.push(device);
                }
            }
            None => unique.push(device),
        }
    }

    unique
}
