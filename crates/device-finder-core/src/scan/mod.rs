//! Device discovery via the external scan API.

pub mod client;
pub mod response;

pub use client::{ScanClient, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use response::{dedup_by_address, parse_scan_response};
