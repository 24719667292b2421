//! Shop Cart entry point
//!
//! The browser build starts from `shop_cart::wasm::start`. Natively this
//! runs a short demo against in-memory storage.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Shop Cart (native) starting...");

    if let Err(e) = run_demo() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo() -> Result<(), shop_cart::CartError> {
    use shop_cart::{CartError, CartStore, MemoryBackend};

    let cart = CartStore::new(MemoryBackend::new());
    cart.add_item("shirt", Some("red"), 2.0)?;
    cart.add_item("shirt", Some("red"), 3.0)?;
    cart.add_item("shirt", Some("blue"), 1.0)?;
    cart.add_item("mug", None, 4.0)?;
    cart.remove_item("shirt", Some("blue"))?;
    cart.update_qty("mug", None, 1.0)?;

    match cart.update_qty("mug", Some("green"), 1.0) {
        Err(CartError::InvalidCombination { .. }) => {}
        other => log::warn!("Expected an invalid combination, got {:?}", other),
    }

    for item in cart.items()? {
        log::info!(
            "{} ({}) x {}",
            item.product_id,
            item.color_id.as_deref().unwrap_or("no color"),
            item.qty
        );
    }
    log::info!("Total items: {}", cart.total_items()?);
    Ok(())
}
