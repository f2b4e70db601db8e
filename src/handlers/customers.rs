use axum::{extract::State, Json};
use tracing::info;

use crate::{models::Customer, AppState};

/// Lists every customer record in the bundled dataset, in fixture order.
/// Infallible: an absent CRM section serves as an empty array, the same
/// response a present-but-empty section produces.
pub async fn list_customers(State(state): State<AppState>) -> Json<Vec<Customer>> {
    let customers = state.dataset.customers();
    info!(count = customers.len(), "Listed customers");
    Json(customers.to_vec())
}
