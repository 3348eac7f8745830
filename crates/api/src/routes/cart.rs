//! Cart endpoint handlers.
//!
//! The cart is a sub-resource of the session: every mutation is a
//! read-modify-write of the whole session record.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use session_core::CartItem;
use telemetry::metrics;
use tracing::info;
use validator::Validate;

use crate::response::{ApiError, CartAddResponse, CartResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddItemParams {
    pub product_id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// POST /cart/{id}?product_id=<int>&quantity=<int> - Merge an item into the cart.
///
/// Product existence and stock are the catalog's concern; only the
/// quantity is validated here.
pub async fn add_item_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<AddItemParams>,
) -> Result<Json<CartAddResponse>, ApiError> {
    let item = CartItem {
        product_id: params.product_id,
        quantity: params.quantity,
    };
    item.validate()
        .map_err(|_| ApiError::bad_request("quantity must be at least 1"))?;

    let cart = state
        .store
        .add_item(&id, params.product_id, params.quantity)
        .await?;

    metrics().cart_adds.inc();
    info!(
        session_id = %id,
        product_id = params.product_id,
        quantity = params.quantity,
        cart_len = cart.len(),
        "Item added to cart"
    );

    Ok(Json(CartAddResponse {
        message: "Item added to cart".to_string(),
        cart,
    }))
}

/// GET /cart/{id} - Fetch the cart, empty if the session has none yet.
pub async fn get_cart_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart = state.store.get_cart(&id).await?;
    Ok(Json(CartResponse {
        cart,
        session_id: id,
    }))
}
