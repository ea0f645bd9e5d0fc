//! HTTP client for the external discovery API.
//!
//! All "scanning" in this system is an HTTP round trip: the backend that
//! actually probes Wi-Fi, Bluetooth and cameras sits behind
//! `/api/devices/*` and this client only fetches and parses its answers.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScanError;
use crate::scan::response::{dedup_by_address, parse_scan_response};
use crate::types::{DiscoveredDevice, ScanMethod};

/// Default base URL of the discovery backend
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Default per-request timeout. There is no retry; a slow scan simply
/// fails and the user re-triggers it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the discovery API.
#[derive(Debug, Clone)]
pub struct ScanClient {
    client: Client,
    base_url: String,
}

impl ScanClient {
    /// Create a client with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ScanError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ScanError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScanError::Client(e.to_string()))?;

        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for an API path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run a scan for the given method.
    pub async fn scan(&self, method: ScanMethod) -> Result<Vec<DiscoveredDevice>, ScanError> {
        self.fetch(&format!("/api/devices/scan?method={}", method.as_str()))
            .await
    }

    /// Currently visible Bluetooth devices.
    pub async fn bluetooth_available(&self) -> Result<Vec<DiscoveredDevice>, ScanError> {
        self.fetch("/api/devices/bluetooth").await
    }

    /// Devices paired with the host.
    pub async fn bluetooth_paired(&self) -> Result<Vec<DiscoveredDevice>, ScanError> {
        self.fetch("/api/devices/bluetooth/paired").await
    }

    /// Combined Bluetooth view: paired devices first, then whatever is
    /// currently visible, deduplicated by address.
    ///
    /// Both requests must succeed; a failure of either fails the whole
    /// operation.
    pub async fn scan_bluetooth_full(&self) -> Result<Vec<DiscoveredDevice>, ScanError> {
        let (mut paired, available) =
            tokio::try_join!(self.bluetooth_paired(), self.bluetooth_available())?;

        paired.extend(available);
        Ok(dedup_by_address(paired))
    }

    async fn fetch(&self, path: &str) -> Result<Vec<DiscoveredDevice>, ScanError> {
        let url = self.endpoint(path);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                ScanError::Timeout { url: url.clone() }
            } else {
                ScanError::Http {
                    url: url.clone(),
                    message: e.to_string(),
                }
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ScanError::Http {
                url,
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let body = response.bytes().await.map_err(|e| ScanError::Http {
            url: url.clone(),
            message: e.to_string(),
        })?;

        parse_scan_response(&body)
    }
}
