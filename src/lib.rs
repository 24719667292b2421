//! Shop Cart - a shopping cart persisted in key-value storage
//!
//! Core modules:
//! - `store`: Cart operations (add, remove, update, clear, totals)
//! - `item`: Cart line type and combination lookup
//! - `persistence`: Storage backend trait plus memory/file backends
//! - `platform`: Browser LocalStorage backend (wasm32)
//! - `config`: Storage key configuration

pub mod config;
pub mod error;
pub mod item;
pub mod persistence;
pub mod platform;
pub mod store;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::CartConfig;
pub use error::CartError;
pub use item::CartItem;
pub use persistence::{FileBackend, MemoryBackend, StorageBackend};
pub use store::CartStore;
