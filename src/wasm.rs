//! JavaScript bindings
//!
//! Exposes a `Cart` class over `window.localStorage` with the same method
//! names the storefront scripts call.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::item::CartItem;
use crate::platform::{LocalStorageBackend, init_logging};
use crate::store::CartStore;

#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
    log::info!("Shop cart loaded");
}

/// LocalStorage-backed cart
#[wasm_bindgen(js_name = Cart)]
pub struct WebCart {
    store: CartStore<LocalStorageBackend>,
}

#[wasm_bindgen(js_class = Cart)]
impl WebCart {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebCart, JsError> {
        Ok(Self {
            store: CartStore::new(LocalStorageBackend::new()?),
        })
    }

    /// Array of `{ productId, colorId, qty }` objects
    #[wasm_bindgen(js_name = getItems)]
    pub fn get_items(&self) -> Result<Array, JsError> {
        let out = Array::new();
        for item in &self.store.items()? {
            out.push(&item_to_js(item)?);
        }
        Ok(out)
    }

    /// Quantities are JS numbers and stored as given, fractions included
    #[wasm_bindgen(js_name = addItem)]
    pub fn add_item(
        &self,
        product_id: &str,
        color_id: Option<String>,
        qty: f64,
    ) -> Result<(), JsError> {
        Ok(self.store.add_item(product_id, color_id.as_deref(), qty)?)
    }

    #[wasm_bindgen(js_name = removeItem)]
    pub fn remove_item(&self, product_id: &str, color_id: Option<String>) -> Result<(), JsError> {
        Ok(self.store.remove_item(product_id, color_id.as_deref())?)
    }

    /// Throws if the product+color isn't in the cart
    #[wasm_bindgen(js_name = updateQty)]
    pub fn update_qty(
        &self,
        product_id: &str,
        color_id: Option<String>,
        qty: f64,
    ) -> Result<(), JsError> {
        Ok(self.store.update_qty(product_id, color_id.as_deref(), qty)?)
    }

    pub fn clear(&self) -> Result<(), JsError> {
        Ok(self.store.clear()?)
    }

    #[wasm_bindgen(js_name = totalItems)]
    pub fn total_items(&self) -> Result<f64, JsError> {
        Ok(self.store.total_items()?)
    }
}

fn item_to_js(item: &CartItem) -> Result<JsValue, JsError> {
    let obj = Object::new();
    let color = match &item.color_id {
        Some(c) => JsValue::from_str(c),
        None => JsValue::NULL,
    };
    let fields = [
        ("productId", JsValue::from_str(&item.product_id)),
        ("colorId", color),
        ("qty", JsValue::from_f64(item.qty)),
    ];
    for (name, value) in &fields {
        Reflect::set(&obj, &JsValue::from_str(name), value)
            .map_err(|_| JsError::new(&format!("Failed to set {} on cart item", name)))?;
    }
    Ok(obj.into())
}
