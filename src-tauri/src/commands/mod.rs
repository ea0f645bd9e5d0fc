//! Tauri command handlers.
//!
//! This module contains all the Tauri commands that are exposed
//! to the frontend via IPC.

pub mod devices;
pub mod protection;
pub mod scan;
