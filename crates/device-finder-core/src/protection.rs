//! Password protection for sensitive device actions.
//!
//! Passwords are held in memory as plain text, keyed by device id, and are
//! gone on restart. Hashing and durable credential storage live outside
//! this crate.

use std::collections::HashMap;

use crate::error::ProtectionError;

/// In-memory password map keyed by device id.
#[derive(Debug, Default)]
pub struct PasswordVault {
    passwords: HashMap<String, String>,
}

impl PasswordVault {
    pub fn new() -> Self {
        Self {
            passwords: HashMap::new(),
        }
    }

    /// Register (or replace) a password for a device.
    pub fn protect(&mut self, id: &str, password: &str) -> Result<(), ProtectionError> {
        if password.is_empty() {
            return Err(ProtectionError::EmptyPassword);
        }
        self.passwords.insert(id.to_string(), password.to_string());
        Ok(())
    }

    /// Remove protection from a device; requires the current password.
    pub fn unprotect(&mut self, id: &str, password: &str) -> Result<(), ProtectionError> {
        self.verify(id, password)?;
        self.passwords.remove(id);
        Ok(())
    }

    /// Check a password against the stored one.
    pub fn verify(&self, id: &str, password: &str) -> Result<(), ProtectionError> {
        let stored = self
            .passwords
            .get(id)
            .ok_or_else(|| ProtectionError::NotProtected(id.to_string()))?;

        if stored == password {
            Ok(())
        } else {
            Err(ProtectionError::PasswordMismatch(id.to_string()))
        }
    }

    pub fn is_protected(&self, id: &str) -> bool {
        self.passwords.contains_key(id)
    }

    /// Drop the entry for a device, if any. Used when the device itself is
    /// removed from the registry.
    pub fn remove_entry(&mut self, id: &str) {
        self.passwords.remove(id);
    }

    pub fn clear(&mut self) {
        self.passwords.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protect_and_verify() {
        let mut vault = PasswordVault::new();
        vault.protect("wifi_0", "s3cret").unwrap();

        assert!(vault.is_protected("wifi_0"));
        assert!(vault.verify("wifi_0", "s3cret").is_ok());
    }

    #[test]
    fn test_verify_mismatch() {
        let mut vault = PasswordVault::new();
        vault.protect("wifi_0", "s3cret").unwrap();

        let err = vault.verify("wifi_0", "wrong").unwrap_err();
        assert!(matches!(err, ProtectionError::PasswordMismatch(_)));
    }

    #[test]
    fn test_verify_unprotected() {
        let vault = PasswordVault::new();
        let err = vault.verify("bt_1", "anything").unwrap_err();
        assert!(matches!(err, ProtectionError::NotProtected(_)));
    }

    #[test]
    fn test_empty_password_rejected() {
        let mut vault = PasswordVault::new();
        assert!(matches!(
            vault.protect("wifi_0", ""),
            Err(ProtectionError::EmptyPassword)
        ));
        assert!(!vault.is_protected("wifi_0"));
    }

    #[test]
    fn test_unprotect_requires_current_password() {
        let mut vault = PasswordVault::new();
        vault.protect("wifi_0", "s3cret").unwrap();

        assert!(vault.unprotect("wifi_0", "wrong").is_err());
        assert!(vault.is_protected("wifi_0"));

        vault.unprotect("wifi_0", "s3cret").unwrap();
        assert!(!vault.is_protected("wifi_0"));
    }

    #[test]
    fn test_protect_replaces_password() {
        let mut vault = PasswordVault::new();
        vault.protect("wifi_0", "old").unwrap();
        vault.protect("wifi_0", "new").unwrap();

        assert!(vault.verify("wifi_0", "old").is_err());
        assert!(vault.verify("wifi_0", "new").is_ok());
    }

    #[test]
    fn test_remove_entry() {
        let mut vault = PasswordVault::new();
        vault.protect("wifi_0", "s3cret").unwrap();

        vault.remove_entry("wifi_0");
        assert!(!vault.is_protected("wifi_0"));

        // Removing a missing entry is a no-op
        vault.remove_entry("wifi_0");
    }
}
