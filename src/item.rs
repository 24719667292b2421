//! Cart line items
//!
//! A line is identified by its product and optional color. The stored JSON
//! uses the camelCase field names the storefront scripts already read.

use serde::{Deserialize, Serialize, Serializer};

/// A single line in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    /// `None` is stored as `null`, never omitted
    pub color_id: Option<String>,
    /// Any JSON number, fractions included. Whole values are written as
    /// integers (`2`, not `2.0`) to match what `JSON.stringify` produces.
    #[serde(serialize_with = "serialize_qty")]
    pub qty: f64,
}

impl CartItem {
    pub fn new(product_id: impl Into<String>, color_id: Option<&str>, qty: f64) -> Self {
        Self {
            product_id: product_id.into(),
            color_id: color_id.map(str::to_owned),
            qty,
        }
    }

    /// True if this line is the given product+color combination.
    ///
    /// Colors compare exactly: `None` only matches `None`, and an empty
    /// string is a real color.
    #[inline]
    pub fn matches(&self, product_id: &str, color_id: Option<&str>) -> bool {
        self.product_id == product_id && self.color_id.as_deref() == color_id
    }
}

/// Index of the first line matching the combination
pub fn find_item_index(
    items: &[CartItem],
    product_id: &str,
    color_id: Option<&str>,
) -> Option<usize> {
    items.iter().position(|item| item.matches(product_id, color_id))
}

/// Past 2^53 an `f64` can't hold every integer, so leave those to `serialize_f64`
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn serialize_qty<S: Serializer>(qty: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if qty.fract() == 0.0 && qty.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*qty as i64)
    } else {
        serializer.serialize_f64(*qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exact_color() {
        let item = CartItem::new("shirt", Some("red"), 1.0);
        assert!(item.matches("shirt", Some("red")));
        assert!(!item.matches("shirt", Some("blue")));
        assert!(!item.matches("shirt", None));
        assert!(!item.matches("pants", Some("red")));
    }

    #[test]
    fn test_matches_null_color() {
        let item = CartItem::new("mug", None, 1.0);
        assert!(item.matches("mug", None));
        // Empty string is not the same as no color
        assert!(!item.matches("mug", Some("")));
    }

    #[test]
    fn test_find_first_match() {
        let items = vec![
            CartItem::new("a", None, 1.0),
            CartItem::new("b", Some("x"), 2.0),
            CartItem::new("b", Some("x"), 3.0),
        ];
        assert_eq!(find_item_index(&items, "b", Some("x")), Some(1));
        assert_eq!(find_item_index(&items, "a", None), Some(0));
        assert_eq!(find_item_index(&items, "c", None), None);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_string(&CartItem::new("shirt", None, 2.0)).unwrap();
        assert_eq!(json, r#"{"productId":"shirt","colorId":null,"qty":2}"#);

        let item: CartItem =
            serde_json::from_str(r#"{"productId":"shirt","colorId":"red","qty":5}"#).unwrap();
        assert_eq!(item, CartItem::new("shirt", Some("red"), 5.0));
    }

    #[test]
    fn test_fractional_qty_round_trips() {
        let item: CartItem =
            serde_json::from_str(r#"{"productId":"rope","colorId":null,"qty":1.5}"#).unwrap();
        assert_eq!(item.qty, 1.5);
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"productId":"rope","colorId":null,"qty":1.5}"#
        );
    }

    #[test]
    fn test_negative_whole_qty_written_as_integer() {
        let json = serde_json::to_string(&CartItem::new("a", None, -3.0)).unwrap();
        assert_eq!(json, r#"{"productId":"a","colorId":null,"qty":-3}"#);
    }
}
