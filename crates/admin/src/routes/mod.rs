//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Health check
//! GET  /                                - Dashboard (?q= sets the search)
//! POST /view                            - "Show:" select
//! POST /sort                            - "Sort by:" select
//! POST /navbar/menu                     - Toggle the mobile menu
//!
//! # Products
//! POST /products/{id}/select            - Toggle row selection
//! POST /products/{id}/duplicate         - Append a copy
//! POST /products/{id}/delete            - Remove
//! POST /products/{id}/edit              - Log an edit request
//! POST /products/new/open               - Open a fresh wizard
//! POST /products/new                    - Wizard button (intent + fields)
//!
//! # Orders
//! POST /orders/{id}/select              - Toggle row selection (selecting opens details)
//! POST /orders/{id}/details             - Open details
//! POST /orders/details/close            - Close details
//! POST /orders/details/transition-end   - Acknowledge a drawer transition
//! POST /orders/details/fulfillment      - Fulfillment dropdown
//!
//! # API (JSON)
//! POST /api/preferences/dark-mode       - Toggle dark mode
//! GET  /api/products                    - Filtered, sorted products
//! GET  /api/orders                      - Filtered orders
//! ```
//!
//! Form posts answer with `303 See Other` back to `/`.

pub mod api;
pub mod dashboard;
pub mod new_product;
pub mod orders;
pub mod products;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{create_session_layer, request_id_middleware};
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/new/open", post(new_product::open))
        .route("/new", post(new_product::submit))
        .route("/{id}/select", post(products::toggle_selection))
        .route("/{id}/duplicate", post(products::duplicate))
        .route("/{id}/delete", post(products::delete))
        .route("/{id}/edit", post(products::edit))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}/select", post(orders::toggle_selection))
        .route("/{id}/details", post(orders::open_details))
        .route("/details/close", post(orders::close_details))
        .route("/details/transition-end", post(orders::transition_end))
        .route("/details/fulfillment", post(orders::fulfillment))
}

/// Create all routes for the dashboard.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(dashboard::health))
        .route("/", get(dashboard::index))
        .route("/view", post(dashboard::choose_filter))
        .route("/sort", post(dashboard::choose_sort))
        .route("/navbar/menu", post(dashboard::toggle_menu))
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
        .nest("/api", api::routes())
}

/// Build the full application: routes, static files and the middleware stack.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let static_dir = ServeDir::new(&state.config().static_dir);

    routes()
        .nest_service("/static", static_dir)
        .layer(session_layer)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}
