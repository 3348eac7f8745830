//! Shopping cart types and merge logic.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Key of the cart inside a session's `session_data`.
pub const CART_KEY: &str = "cart";

/// A product/quantity pair in a cart. `product_id` is unique within a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CartItem {
    /// Reference to an external product entity; existence and stock are
    /// the catalog's concern, not validated here.
    pub product_id: i64,
    #[validate(range(min = 1))]
    pub quantity: u32,
}

/// Merges an item into a cart: an existing `product_id` gains `quantity`,
/// otherwise a new entry is appended.
pub fn add_to_cart(cart: &mut Vec<CartItem>, product_id: i64, quantity: u32) {
    if let Some(item) = cart.iter_mut().find(|item| item.product_id == product_id) {
        item.quantity += quantity;
    } else {
        cart.push(CartItem {
            product_id,
            quantity,
        });
    }
}
