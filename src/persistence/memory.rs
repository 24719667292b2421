//! In-memory backend

use std::cell::RefCell;
use std::collections::HashMap;

use super::StorageBackend;
use crate::error::CartError;

/// Map-backed store. Each instance is isolated; nothing survives a drop.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored string for `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Overwrite `key` directly, bypassing the cart
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Drop everything, like the browser wiping site data
    pub fn wipe(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, CartError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CartError> {
        self.insert_raw(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("cart").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let backend = MemoryBackend::new();
        backend.set("cart", "[]").unwrap();
        assert_eq!(backend.get("cart").unwrap().as_deref(), Some("[]"));
        backend.set("cart", "[1]").unwrap();
        assert_eq!(backend.raw("cart").as_deref(), Some("[1]"));
    }

    #[test]
    fn test_instances_are_isolated() {
        let a = MemoryBackend::new();
        let b = MemoryBackend::new();
        a.set("cart", "[]").unwrap();
        assert_eq!(b.get("cart").unwrap(), None);
    }

    #[test]
    fn test_wipe() {
        let backend = MemoryBackend::new();
        backend.insert_raw("cart", "[]");
        backend.wipe();
        assert_eq!(backend.raw("cart"), None);
    }
}
