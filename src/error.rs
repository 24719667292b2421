//! Cart error type

use thiserror::Error;

/// Everything that can go wrong while reading or mutating the cart
#[derive(Debug, Error)]
pub enum CartError {
    /// `update_qty` was asked to touch a line that isn't in the cart
    #[error("Invalid product+color combination: {product_id}, {}", color_label(.color_id))]
    InvalidCombination {
        product_id: String,
        color_id: Option<String>,
    },

    /// A quantity or running total left the finite range, which JSON can't store
    #[error("Quantity out of range: {0}")]
    QtyOutOfRange(f64),

    /// The stored slot didn't parse as a list of cart items
    #[error("Cart storage is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),

    /// The storage backend refused a read or write
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl From<std::io::Error> for CartError {
    fn from(err: std::io::Error) -> Self {
        CartError::Backend(err.to_string())
    }
}

fn color_label(color_id: &Option<String>) -> &str {
    color_id.as_deref().unwrap_or("null")
}
