//! Sidebar section placement.
//!
//! Devices are bucketed into Favorites / Online / Offline. A favorited
//! device appears in Favorites only, so the three sections partition the
//! device list.

use crate::registry::filter;
use crate::types::{Device, DeviceSections, DeviceStatus};

/// Sort a device list for display: case-insensitive by name, id as
/// tie-breaker so the order is stable across refreshes.
pub fn sort_for_display(devices: &mut [Device]) {
    devices.sort_by(|a, b| {
        (a.name.to_lowercase(), &a.id).cmp(&(b.name.to_lowercase(), &b.id))
    });
}

/// Bucket devices into sidebar sections, applying the live search filter.
pub fn build_sections(devices: Vec<Device>, query: &str) -> DeviceSections {
    let mut sections = DeviceSections::default();

    for device in devices {
        if !filter::matches(&device.name, query) {
            continue;
        }

        if device.favorite {
            sections.favorites.push(device);
        } else if device.status == DeviceStatus::Online {
            sections.online.push(device);
        } else {
            sections.offline.push(device);
        }
    }

    sort_for_display(&mut sections.favorites);
    sort_for_display(&mut sections.online);
    sort_for_display(&mut sections.offline);

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeviceKind;

    fn device(id: &str, name: &str, status: DeviceStatus, favorite: bool) -> Device {
        Device {
            id: id.to_string(),
            name: name.to_string(),
            kind: DeviceKind::Other,
            status,
            favorite,
            protected: false,
            ip: None,
            address: None,
            signal: None,
            security: None,
            manually_added: false,
            last_seen: None,
        }
    }

    #[test]
    fn test_sections_partition() {
        let devices = vec![
            device("a", "Printer", DeviceStatus::Online, false),
            device("b", "Sensor", DeviceStatus::Offline, false),
            device("c", "Camera", DeviceStatus::Online, true),
            device("d", "Speaker", DeviceStatus::Offline, true),
        ];

        let sections = build_sections(devices, "");

        assert_eq!(sections.favorites.len(), 2);
        assert_eq!(sections.online.len(), 1);
        assert_eq!(sections.offline.len(), 1);
        assert_eq!(sections.len(), 4);
    }

    #[test]
    fn test_favorites_never_duplicated() {
        let devices = vec![device("a", "Camera", DeviceStatus::Online, true)];

        let sections = build_sections(devices, "");

        assert_eq!(sections.favorites.len(), 1);
        assert!(sections.online.is_empty());
        assert!(sections.offline.is_empty());
    }

    #[test]
    fn test_filter_applies_to_all_sections() {
        let devices = vec![
            device("a", "Office Printer", DeviceStatus::Online, false),
            device("b", "Office Camera", DeviceStatus::Offline, true),
            device("c", "Kitchen Speaker", DeviceStatus::Online, false),
        ];

        let sections = build_sections(devices, "office");

        assert_eq!(sections.favorites.len(), 1);
        assert_eq!(sections.online.len(), 1);
        assert!(sections.offline.is_empty());
    }

    #[test]
    fn test_sections_sorted_case_insensitive() {
        let devices = vec![
            device("1", "zeta", DeviceStatus::Online, false),
            device("2", "Alpha", DeviceStatus::Online, false),
            device("3", "beta", DeviceStatus::Online, false),
        ];

        let sections = build_sections(devices, "");
        let names: Vec<&str> = sections.online.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_stable_order_for_equal_names() {
        let devices = vec![
            device("b", "Printer", DeviceStatus::Online, false),
            device("a", "Printer", DeviceStatus::Online, false),
        ];

        let sections = build_sections(devices, "");
        let ids: Vec<&str> = sections.online.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
