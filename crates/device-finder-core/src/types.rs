//! Type definitions for Device Finder.
//!
//! These types mirror the TypeScript definitions used by the dashboard
//! frontend. They are serialized/deserialized using serde to ensure
//! compatibility across the IPC boundary and the scan API wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A managed device shown in the dashboard sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Unique device identifier (scan id such as `wifi_0`, or `manual_<n>`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Device category used for icon selection
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    /// Current status; synthetic, not a real connectivity check
    pub status: DeviceStatus,
    /// Whether the device is pinned to the Favorites section
    pub favorite: bool,
    /// Whether a password is registered for this device
    pub protected: bool,
    /// IP address, only present for manually-added devices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// MAC address or identifier reported by the scan API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Wi-Fi signal strength as reported (e.g. "78%")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
    /// Wi-Fi security/authentication type as reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    /// Whether the device was added through the add-device dialog
    pub manually_added: bool,
    /// When the device was last returned by a scan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

/// Device category, used by the frontend to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Smartphone,
    Laptop,
    Printer,
    Camera,
    Router,
    Speaker,
    Sensor,
    Bluetooth,
    Other,
}

impl DeviceKind {
    /// Parse a kind tag from the add/edit dialog.
    pub fn from_str(s: &str) -> Self {
        match s {
            "smartphone" => DeviceKind::Smartphone,
            "laptop" => DeviceKind::Laptop,
            "printer" => DeviceKind::Printer,
            "camera" => DeviceKind::Camera,
            "router" => DeviceKind::Router,
            "speaker" => DeviceKind::Speaker,
            "sensor" => DeviceKind::Sensor,
            "bluetooth" => DeviceKind::Bluetooth,
            _ => DeviceKind::Other,
        }
    }

    /// Map the icon tag carried by scan API records.
    ///
    /// The scan backend tags records with an emoji per transport
    /// ("📡" Wi-Fi network, "🔷" Bluetooth, "📹" camera).
    pub fn from_scan_tag(tag: &str) -> Self {
        match tag {
            "📡" => DeviceKind::Router,
            "🔷" => DeviceKind::Bluetooth,
            "📹" => DeviceKind::Camera,
            other => DeviceKind::from_str(other),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceKind::Smartphone => "Smartphone",
            DeviceKind::Laptop => "Laptop",
            DeviceKind::Printer => "Printer",
            DeviceKind::Camera => "Camera",
            DeviceKind::Router => "Router",
            DeviceKind::Speaker => "Speaker",
            DeviceKind::Sensor => "Sensor",
            DeviceKind::Bluetooth => "Bluetooth",
            DeviceKind::Other => "Other",
        }
    }
}

impl Default for DeviceKind {
    fn default() -> Self {
        DeviceKind::Other
    }
}

/// Synthetic online/offline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
}

impl DeviceStatus {
    /// The opposite status, used by the status toggle.
    pub fn toggled(self) -> Self {
        match self {
            DeviceStatus::Online => DeviceStatus::Offline,
            DeviceStatus::Offline => DeviceStatus::Online,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "online",
            DeviceStatus::Offline => "offline",
        }
    }
}

/// Discovery transport selector, forwarded as the `method` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMethod {
    Wifi,
    Bluetooth,
    Camera,
    /// Aggregate of all transports
    All,
}

impl ScanMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMethod::Wifi => "wifi",
            ScanMethod::Bluetooth => "bluetooth",
            ScanMethod::Camera => "camera",
            ScanMethod::All => "all",
        }
    }
}

impl std::fmt::Display for ScanMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record returned by the scan API, before import into the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveredDevice {
    /// Scan id (`wifi_0`, `bt_3`, `cam_1`)
    pub id: String,
    /// Reported name (SSID, BLE name, camera label)
    pub name: String,
    /// Icon tag as sent by the backend
    #[serde(rename = "type", default)]
    pub kind: String,
    /// MAC address or camera identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Wi-Fi signal strength
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
    /// Wi-Fi security type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    /// Camera device index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

impl DiscoveredDevice {
    /// Convert a scan record into a sidebar device.
    ///
    /// Scan results were just observed, so they enter the registry online
    /// with a fresh `last_seen` stamp.
    pub fn into_device(self) -> Device {
        Device {
            kind: DeviceKind::from_scan_tag(&self.kind),
            id: self.id,
            name: self.name,
            status: DeviceStatus::Online,
            favorite: false,
            protected: false,
            ip: None,
            address: self.address,
            signal: self.signal,
            security: self.security,
            manually_added: false,
            last_seen: Some(Utc::now()),
        }
    }
}

/// Input payload for the add-device dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDevice {
    /// Display name, must be non-empty
    pub name: String,
    /// Device category
    #[serde(default)]
    pub kind: DeviceKind,
    /// Optional IPv4 address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

/// Partial update applied by the edit dialog. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DeviceKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

/// The sidebar view: every matching device in exactly one section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSections {
    pub favorites: Vec<Device>,
    pub online: Vec<Device>,
    pub offline: Vec<Device>,
}

impl DeviceSections {
    /// Total number of devices across all sections.
    pub fn len(&self) -> usize {
        self.favorites.len() + self.online.len() + self.offline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
