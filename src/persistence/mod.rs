//! Key-value storage backends
//!
//! The cart only needs string get/set on a single key. Backends store raw
//! strings; JSON encoding is the store's job.
//!
//! - `MemoryBackend`: per-instance map, for tests and native demos
//! - `FileBackend`: one file per key, atomic replace on write
//! - `platform::LocalStorageBackend`: browser LocalStorage (wasm32)

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use std::rc::Rc;

use crate::error::CartError;

/// String key-value store the cart persists into.
///
/// Methods take `&self`; backends that need to mutate use interior
/// mutability, like `web_sys::Storage` does.
pub trait StorageBackend {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, CartError>;

    /// Write `value` under `key`, replacing anything there
    fn set(&self, key: &str, value: &str) -> Result<(), CartError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>, CartError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CartError> {
        (**self).set(key, value)
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for Rc<B> {
    fn get(&self, key: &str) -> Result<Option<String>, CartError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CartError> {
        (**self).set(key, value)
    }
}
