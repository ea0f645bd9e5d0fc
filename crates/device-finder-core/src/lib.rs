//! Shared core library for Device Finder.
//!
//! Holds the domain logic shared by the desktop app and the CLI: the
//! in-memory device registry with sidebar sectioning and live search,
//! password protection for sensitive actions, and the HTTP client for the
//! external discovery API.

pub mod error;
pub mod protection;
pub mod registry;
pub mod scan;
pub mod types;

pub use error::{AppError, CoreError, Result};
pub use protection::PasswordVault;
pub use registry::DeviceRegistry;
pub use scan::ScanClient;
pub use types::{
    Device, DeviceKind, DeviceSections, DeviceStatus, DeviceUpdate, DiscoveredDevice, NewDevice,
    ScanMethod,
};
