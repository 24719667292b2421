//! Platform abstraction layer
//!
//! Browser-only pieces live here:
//! - `LocalStorageBackend`: `window.localStorage` as a cart backend
//! - `init_logging`: console logger + panic hook

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{LocalStorageBackend, init_logging};
