//! Browser LocalStorage backend

use wasm_bindgen::{JsCast, JsValue};
use web_sys::Storage;

use crate::error::CartError;
use crate::persistence::StorageBackend;

/// Cart backend over `window.localStorage`
pub struct LocalStorageBackend {
    storage: Storage,
}

impl LocalStorageBackend {
    /// Grab the page's LocalStorage
    pub fn new() -> Result<Self, CartError> {
        let storage = web_sys::window()
            .ok_or_else(|| CartError::Backend("No window object".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| CartError::Backend("LocalStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }

    pub fn from_storage(storage: Storage) -> Self {
        Self { storage }
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, CartError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CartError> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> CartError {
    let msg = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err));
    log::warn!("LocalStorage error: {}", msg);
    CartError::Backend(msg)
}

/// Route `log` to the browser console and panics to `console.error`
pub fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialized if a second cart module loads on the page
    let _ = console_log::init_with_level(log::Level::Info);
}
