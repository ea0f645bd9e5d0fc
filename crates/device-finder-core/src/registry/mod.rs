//! In-memory device registry.
//!
//! The registry is the source of truth for the dashboard sidebar. It holds
//! every known device keyed by id and implements the lifecycle operations
//! behind the add/edit/delete dialogs and the favorite/status toggles.
//! Nothing is persisted; a restart starts from an empty registry.

pub mod filter;
pub mod sections;

use std::collections::HashMap;

use regex::Regex;

use crate::error::RegistryError;
use crate::types::{
    Device, DeviceSections, DeviceStatus, DeviceUpdate, DiscoveredDevice, NewDevice,
};

/// Regex for IPv4 dotted-quad addresses; octet range is checked separately.
const IP_PATTERN: &str = r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$";

/// Maximum device name length in characters
const MAX_NAME_LENGTH: usize = 64;

/// In-memory device registry.
pub struct DeviceRegistry {
    devices: HashMap<String, Device>,
    /// Counter backing `manual_<n>` id assignment
    next_manual_id: u64,
    ip_regex: Regex,
}

impl DeviceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            devices: HashMap::new(),
            next_manual_id: 1,
            // Pattern is a compile-time constant, so this cannot fail.
            ip_regex: Regex::new(IP_PATTERN).unwrap(),
        }
    }

    /// Validate a display name from the add/edit dialog.
    fn validate_name(&self, name: &str) -> Result<(), RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidName(
                "Name cannot be empty".to_string(),
            ));
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(RegistryError::InvalidName(format!(
                "Name exceeds maximum length of {} characters",
                MAX_NAME_LENGTH
            )));
        }

        Ok(())
    }

    /// Validate an IPv4 address supplied for a manually-added device.
    fn validate_ip(&self, ip: &str) -> Result<(), RegistryError> {
        let captures = self
            .ip_regex
            .captures(ip)
            .ok_or_else(|| RegistryError::InvalidIp(ip.to_string()))?;

        for i in 1..=4 {
            let octet: u32 = captures[i]
                .parse()
                .map_err(|_| RegistryError::InvalidIp(ip.to_string()))?;
            if octet > 255 {
                return Err(RegistryError::InvalidIp(ip.to_string()));
            }
        }

        Ok(())
    }

    /// Add a device from the add-device dialog.
    ///
    /// The initial status is assigned randomly; there is no real
    /// connectivity check behind it.
    pub fn add(&mut self, new: NewDevice) -> Result<Device, RegistryError> {
        self.validate_name(&new.name)?;

        if let Some(ip) = &new.ip {
            self.validate_ip(ip)?;
        }

        let id = format!("manual_{}", self.next_manual_id);
        self.next_manual_id += 1;

        let status = if rand::random() {
            DeviceStatus::Online
        } else {
            DeviceStatus::Offline
        };

        let device = Device {
            id: id.clone(),
            name: new.name.trim().to_string(),
            kind: new.kind,
            status,
            favorite: false,
            protected: false,
            ip: new.ip,
            address: None,
            signal: None,
            security: None,
            manually_added: true,
            last_seen: None,
        };

        self.devices.insert(id, device.clone());
        Ok(device)
    }

    /// Import a scan result, upserting by id.
    ///
    /// Re-importing a known id refreshes the scan-reported fields and the
    /// `last_seen` stamp but keeps the user's favorite and protected flags.
    pub fn import(&mut self, discovered: DiscoveredDevice) -> Device {
        let incoming = discovered.into_device();

        let device = match self.devices.get(&incoming.id) {
            Some(existing) => Device {
                favorite: existing.favorite,
                protected: existing.protected,
                ..incoming
            },
            None => incoming,
        };

        self.devices.insert(device.id.clone(), device.clone());
        device
    }

    /// Apply an edit-dialog update to a device.
    pub fn update(&mut self, id: &str, update: DeviceUpdate) -> Result<Device, RegistryError> {
        if let Some(name) = &update.name {
            self.validate_name(name)?;
        }
        if let Some(ip) = &update.ip {
            self.validate_ip(ip)?;
        }

        let device = self
            .devices
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        if let Some(name) = update.name {
            device.name = name.trim().to_string();
        }
        if let Some(kind) = update.kind {
            device.kind = kind;
        }
        if let Some(ip) = update.ip {
            device.ip = Some(ip);
        }

        Ok(device.clone())
    }

    /// Remove a device. Password gating happens in the caller before this.
    pub fn remove(&mut self, id: &str) -> Result<Device, RegistryError> {
        self.devices
            .remove(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Flip a device between online and offline.
    pub fn toggle_status(&mut self, id: &str) -> Result<Device, RegistryError> {
        let device = self
            .devices
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        device.status = device.status.toggled();
        Ok(device.clone())
    }

    /// Pin or unpin a device from the Favorites section.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<Device, RegistryError> {
        let device = self
            .devices
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        device.favorite = !device.favorite;
        Ok(device.clone())
    }

    /// Mark whether a password is registered for the device.
    pub fn set_protected(&mut self, id: &str, protected: bool) -> Result<Device, RegistryError> {
        let device = self
            .devices
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        device.protected = protected;
        Ok(device.clone())
    }

    pub fn get(&self, id: &str) -> Option<Device> {
        self.devices.get(id).cloned()
    }

    /// All devices, sorted by name for consistent UI ordering.
    pub fn all(&self) -> Vec<Device> {
        let mut list: Vec<Device> = self.devices.values().cloned().collect();
        sections::sort_for_display(&mut list);
        list
    }

    /// The sidebar view: Favorites / Online / Offline, filtered by name.
    pub fn sections(&self, filter: &str) -> DeviceSections {
        let devices: Vec<Device> = self.devices.values().cloned().collect();
        sections::build_sections(devices, filter)
    }

    pub fn clear(&mut self) {
        self.devices.clear();
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeviceKind;

    fn new_device(name: &str) -> NewDevice {
        NewDevice {
            name: name.to_string(),
            kind: DeviceKind::Printer,
            ip: None,
        }
    }

    fn discovered(id: &str, name: &str) -> DiscoveredDevice {
        DiscoveredDevice {
            id: id.to_string(),
            name: name.to_string(),
            kind: "📡".to_string(),
            address: Some("AA:BB:CC:DD:EE:FF".to_string()),
            signal: None,
            security: None,
            index: None,
        }
    }

    #[test]
    fn test_add_assigns_sequential_manual_ids() {
        let mut registry = DeviceRegistry::new();

        let first = registry.add(new_device("Office Printer")).unwrap();
        let second = registry.add(new_device("Kitchen Speaker")).unwrap();

        assert_eq!(first.id, "manual_1");
        assert_eq!(second.id, "manual_2");
        assert!(first.manually_added);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut registry = DeviceRegistry::new();

        assert!(registry.add(new_device("")).is_err());
        assert!(registry.add(new_device("   ")).is_err());
    }

    #[test]
    fn test_add_rejects_overlong_name() {
        let mut registry = DeviceRegistry::new();
        assert!(registry.add(new_device(&"x".repeat(65))).is_err());
        assert!(registry.add(new_device(&"x".repeat(64))).is_ok());
    }

    #[test]
    fn test_add_validates_ip() {
        let mut registry = DeviceRegistry::new();

        let mut device = new_device("NAS");
        device.ip = Some("192.168.1.42".to_string());
        assert!(registry.add(device).is_ok());

        for bad in ["256.1.1.1", "10.0.0", "not-an-ip", "1.2.3.4.5", ""] {
            let mut device = new_device("NAS");
            device.ip = Some(bad.to_string());
            let result = registry.add(device);
            assert!(result.is_err(), "expected rejection for {:?}", bad);
        }
    }

    #[test]
    fn test_add_trims_name() {
        let mut registry = DeviceRegistry::new();
        let device = registry.add(new_device("  Hall Sensor  ")).unwrap();
        assert_eq!(device.name, "Hall Sensor");
    }

    #[test]
    fn test_import_upserts_and_preserves_flags() {
        let mut registry = DeviceRegistry::new();

        let imported = registry.import(discovered("wifi_0", "HomeNet"));
        assert_eq!(imported.status, DeviceStatus::Online);
        assert!(!imported.favorite);

        registry.toggle_favorite("wifi_0").unwrap();
        registry.set_protected("wifi_0", true).unwrap();

        // Re-import with a changed name: flags survive, name refreshes
        let refreshed = registry.import(discovered("wifi_0", "HomeNet 5G"));
        assert_eq!(refreshed.name, "HomeNet 5G");
        assert!(refreshed.favorite);
        assert!(refreshed.protected);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_device() {
        let mut registry = DeviceRegistry::new();
        let device = registry.add(new_device("Printer")).unwrap();

        let updated = registry
            .update(
                &device.id,
                DeviceUpdate {
                    name: Some("Laser Printer".to_string()),
                    kind: Some(DeviceKind::Printer),
                    ip: Some("10.0.0.20".to_string()),
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Laser Printer");
        assert_eq!(updated.ip.as_deref(), Some("10.0.0.20"));
    }

    #[test]
    fn test_update_rejects_invalid_fields_without_mutating() {
        let mut registry = DeviceRegistry::new();
        let device = registry.add(new_device("Printer")).unwrap();

        let result = registry.update(
            &device.id,
            DeviceUpdate {
                name: Some("Renamed".to_string()),
                kind: None,
                ip: Some("999.0.0.1".to_string()),
            },
        );
        assert!(result.is_err());

        // Validation failed before any field was applied
        assert_eq!(registry.get(&device.id).unwrap().name, "Printer");
    }

    #[test]
    fn test_update_missing_device() {
        let mut registry = DeviceRegistry::new();
        assert!(registry.update("manual_99", DeviceUpdate::default()).is_err());
    }

    #[test]
    fn test_remove_device() {
        let mut registry = DeviceRegistry::new();
        let device = registry.add(new_device("Printer")).unwrap();

        let removed = registry.remove(&device.id).unwrap();
        assert_eq!(removed.id, device.id);
        assert!(registry.is_empty());
        assert!(registry.remove(&device.id).is_err());
    }

    #[test]
    fn test_toggle_status_flips() {
        let mut registry = DeviceRegistry::new();
        let device = registry.add(new_device("Sensor")).unwrap();

        let toggled = registry.toggle_status(&device.id).unwrap();
        assert_eq!(toggled.status, device.status.toggled());

        let toggled_back = registry.toggle_status(&device.id).unwrap();
        assert_eq!(toggled_back.status, device.status);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut registry = DeviceRegistry::new();
        let device = registry.add(new_device("Sensor")).unwrap();
        assert!(!device.favorite);

        assert!(registry.toggle_favorite(&device.id).unwrap().favorite);
        assert!(!registry.toggle_favorite(&device.id).unwrap().favorite);
    }

    #[test]
    fn test_all_sorted_by_name() {
        let mut registry = DeviceRegistry::new();
        registry.add(new_device("zebra")).unwrap();
        registry.add(new_device("Alpha")).unwrap();
        registry.add(new_device("mango")).unwrap();

        let names: Vec<String> = registry.all().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Alpha", "mango", "zebra"]);
    }

    #[test]
    fn test_clear() {
        let mut registry = DeviceRegistry::new();
        registry.add(new_device("Printer")).unwrap();
        registry.import(discovered("wifi_0", "HomeNet"));

        registry.clear();
        assert!(registry.is_empty());
    }
}
