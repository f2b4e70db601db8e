use axum::{extract::State, Json};
use tracing::info;

use crate::{models::Product, AppState};

/// Lists every product record in the bundled dataset, in fixture order.
/// Same absence contract as the customers endpoint.
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.dataset.products();
    info!(count = products.len(), "Listed products");
    Json(products.to_vec())
}
