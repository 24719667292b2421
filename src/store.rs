//! Cart store
//!
//! Every operation is a full read-modify-write against the backend: load the
//! list, change it, write it all back. Nothing is cached between calls, so two
//! stores on the same backend always see each other's writes. Interleaving
//! them is last-write-wins.

use crate::config::CartConfig;
use crate::error::CartError;
use crate::item::{CartItem, find_item_index};
use crate::persistence::StorageBackend;

/// Shopping cart persisted under a single backend key
#[derive(Debug)]
pub struct CartStore<B: StorageBackend> {
    backend: B,
    config: CartConfig,
}

impl<B: StorageBackend> CartStore<B> {
    /// Cart stored under the default `"cart"` key
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, CartConfig::default())
    }

    pub fn with_config(backend: B, config: CartConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// All lines, in the order they were first added
    pub fn items(&self) -> Result<Vec<CartItem>, CartError> {
        self.load()
    }

    /// Add `qty` of a product+color. Bumps the existing line if there is one,
    /// otherwise appends a new line. `qty` isn't validated beyond being a
    /// storable (finite) number.
    pub fn add_item(
        &self,
        product_id: &str,
        color_id: Option<&str>,
        qty: f64,
    ) -> Result<(), CartError> {
        let mut items = self.load()?;
        match find_item_index(&items, product_id, color_id) {
            Some(i) => items[i].qty = finite(items[i].qty + qty)?,
            None => items.push(CartItem::new(product_id, color_id, finite(qty)?)),
        }
        self.save(&items)?;
        log::debug!("Added {} x {}/{:?}", qty, product_id, color_id);
        Ok(())
    }

    /// Drop every line matching the combination. No-op if none match.
    pub fn remove_item(&self, product_id: &str, color_id: Option<&str>) -> Result<(), CartError> {
        let mut items = self.load()?;
        items.retain(|item| !item.matches(product_id, color_id));
        self.save(&items)?;
        log::debug!("Removed {}/{:?}", product_id, color_id);
        Ok(())
    }

    /// Set a line's quantity outright.
    ///
    /// Fails with `InvalidCombination` if the line doesn't exist; storage is
    /// left untouched in that case.
    pub fn update_qty(
        &self,
        product_id: &str,
        color_id: Option<&str>,
        qty: f64,
    ) -> Result<(), CartError> {
        let mut items = self.load()?;
        let Some(i) = find_item_index(&items, product_id, color_id) else {
            return Err(CartError::InvalidCombination {
                product_id: product_id.to_string(),
                color_id: color_id.map(str::to_owned),
            });
        };
        items[i].qty = finite(qty)?;
        self.save(&items)?;
        log::debug!("Set {}/{:?} to {}", product_id, color_id, qty);
        Ok(())
    }

    /// Empty the cart
    pub fn clear(&self) -> Result<(), CartError> {
        self.save(&[])?;
        log::debug!("Cart cleared");
        Ok(())
    }

    /// Sum of quantities across all lines
    pub fn total_items(&self) -> Result<f64, CartError> {
        finite(self.load()?.iter().fold(0.0, |acc, item| acc + item.qty))
    }

    /// Write an empty list if the slot doesn't exist yet
    pub fn initialize_storage(&self) -> Result<(), CartError> {
        let key = &self.config.storage_key;
        if self.backend.get(key)?.is_none() {
            self.backend.set(key, "[]")?;
            log::info!("Initialized cart storage at {:?}", key);
        }
        Ok(())
    }

    /// Read and parse the stored list, initializing the slot first
    pub fn load(&self) -> Result<Vec<CartItem>, CartError> {
        self.initialize_storage()?;
        let json = self
            .backend
            .get(&self.config.storage_key)?
            .unwrap_or_else(|| "[]".to_string());
        serde_json::from_str(&json).map_err(|e| {
            log::warn!("Failed to parse cart storage: {}", e);
            CartError::Corrupted(e)
        })
    }

    /// Serialize and write the full list
    pub fn save(&self, items: &[CartItem]) -> Result<(), CartError> {
        let json = serde_json::to_string(items)?;
        self.backend.set(&self.config.storage_key, &json)
    }
}

/// JSON has no infinity or NaN; serde_json would write them as `null`
fn finite(qty: f64) -> Result<f64, CartError> {
    if qty.is_finite() {
        Ok(qty)
    } else {
        Err(CartError::QtyOutOfRange(qty))
    }
}
