//! Error handling for Tauri commands.
//!
//! Commands return core's serializable [`AppError`] so failures cross the
//! IPC boundary as structured values the frontend can match on.

pub use device_finder_core::error::AppError;
