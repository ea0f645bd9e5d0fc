//! Error types for Device Finder core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Protection error: {0}")]
    Protection(#[from] ProtectionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Device registry errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Device not found: {0}")]
    NotFound(String),

    #[error("Device already exists: {0}")]
    DuplicateId(String),

    #[error("Invalid device name: {0}")]
    InvalidName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIp(String),
}

/// Scan API errors
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("Scan backend reported an error: {message}")]
    Api { message: String },

    #[error("Invalid scan response: {message}")]
    Parse { message: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },
}

/// Password protection errors
#[derive(Debug, Error)]
pub enum ProtectionError {
    #[error("Incorrect password for device {0}")]
    PasswordMismatch(String),

    #[error("Device {0} is not protected")]
    NotProtected(String),

    #[error("Password cannot be empty")]
    EmptyPassword,
}

/// Serializable error for Tauri command responses.
///
/// This is a simplified error that can cross the Tauri IPC boundary.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Scan error: {0}")]
    Scan(String),

    #[error("Password error: {0}")]
    PasswordMismatch(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e.to_string())
    }
}

impl From<CoreError> for AppError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Registry(re) => match re {
                RegistryError::NotFound(id) => AppError::NotFound(id),
                other => AppError::Validation(other.to_string()),
            },
            CoreError::Scan(se) => AppError::Scan(se.to_string()),
            CoreError::Protection(pe) => match pe {
                ProtectionError::PasswordMismatch(id) => AppError::PasswordMismatch(id),
                other => AppError::Validation(other.to_string()),
            },
            CoreError::Io(e) => AppError::Io(e.to_string()),
            CoreError::Other(msg) => AppError::Io(msg),
        }
    }
}

impl From<RegistryError> for AppError {
    fn from(e: RegistryError) -> Self {
        CoreError::from(e).into()
    }
}

impl From<ScanError> for AppError {
    fn from(e: ScanError) -> Self {
        CoreError::from(e).into()
    }
}

impl From<ProtectionError> for AppError {
    fn from(e: ProtectionError) -> Self {
        CoreError::from(e).into()
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Validation("name cannot be empty".to_string());
        assert_eq!(format!("{}", err), "Validation error: name cannot be empty");
    }

    #[test]
    fn test_app_error_serialization() {
        let err = AppError::NotFound("manual_3".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("NotFound"));
    }

    #[test]
    fn test_core_error_from_scan_error() {
        let err = CoreError::Scan(ScanError::Api {
            message: "adapter unavailable".to_string(),
        });
        assert!(format!("{}", err).contains("adapter unavailable"));
    }

    #[test]
    fn test_registry_not_found_to_app_error() {
        let core_err = CoreError::Registry(RegistryError::NotFound("wifi_9".to_string()));
        let app_err: AppError = core_err.into();
        assert!(matches!(app_err, AppError::NotFound(_)));
    }

    #[test]
    fn test_password_mismatch_to_app_error() {
        let app_err: AppError = ProtectionError::PasswordMismatch("bt_1".to_string()).into();
        assert!(matches!(app_err, AppError::PasswordMismatch(_)));
    }

    #[test]
    fn test_invalid_name_to_validation() {
        let app_err: AppError = RegistryError::InvalidName("''".to_string()).into();
        assert!(matches!(app_err, AppError::Validation(_)));
    }
}
