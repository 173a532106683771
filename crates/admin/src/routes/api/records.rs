//! Read-only record listings.
//!
//! Listings follow the dashboard's current search and sort unless a `q`
//! parameter is given, which filters without changing the dashboard.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use stockroom_core::{Order, Product};
use tracing::instrument;

use crate::{
    dashboard::{filter_records, sort_products},
    state::AppState,
};

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
}

/// Product listing.
#[derive(Debug, Serialize)]
pub struct ProductList {
    pub total: usize,
    pub visible: usize,
    pub summary: String,
    pub products: Vec<Product>,
}

/// Order listing.
#[derive(Debug, Serialize)]
pub struct OrderList {
    pub total: usize,
    pub visible: usize,
    pub summary: String,
    pub orders: Vec<Order>,
}

/// `GET /api/products`
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ProductList> {
    let dashboard = state.dashboard().read().await;
    let needle = query.q.as_deref().unwrap_or_else(|| dashboard.search());
    let mut visible = filter_records(dashboard.products(), needle);
    sort_products(&mut visible, dashboard.sort());

    let total = dashboard.products().len();
    Json(ProductList {
        total,
        visible: visible.len(),
        summary: format!("Showing {} of {total} products", visible.len()),
        products: visible.into_iter().cloned().collect(),
    })
}

/// `GET /api/orders`
#[instrument(skip(state))]
pub async fn orders(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<OrderList> {
    let dashboard = state.dashboard().read().await;
    let needle = query.q.as_deref().unwrap_or_else(|| dashboard.search());
    let visible = filter_records(dashboard.orders(), needle);

    let total = dashboard.orders().len();
    Json(OrderList {
        total,
        visible: visible.len(),
        summary: format!("Showing {} of {total} orders", visible.len()),
        orders: visible.into_iter().cloned().collect(),
    })
}
