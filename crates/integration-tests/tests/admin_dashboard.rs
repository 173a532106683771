//! Dashboard page, table controls and middleware.

use std::time::Duration;

use axum::http::StatusCode;
use stockroom_admin::middleware::REQUEST_ID_HEADER;
use stockroom_admin::{AppState, routes};
use stockroom_integration_tests::{
    assert_redirects_home, body_text, get, post_form, test_app, test_config,
};
use tower::ServiceExt;

#[tokio::test]
async fn test_health() {
    let response = test_app().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let response = test_app().oneshot(get("/health", None)).await.unwrap();
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn test_dashboard_renders_seed_products() {
    let response = test_app().oneshot(get("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("DashboardX"));
    assert!(html.contains("Showing 7 of 7 products"));
    assert!(html.contains("+ New Product"));
    assert!(html.contains("Novoneyra Text Patch T-Shirt"));
    assert!(!html.contains("order-details"));
}

#[tokio::test]
async fn test_search_is_kept_until_cleared() {
    let app = test_app();

    let html = body_text(app.clone().oneshot(get("/?q=zara", None)).await.unwrap()).await;
    assert!(html.contains("Showing 2 of 7 products"));
    assert!(html.contains(r#"value="zara""#));

    let html = body_text(app.clone().oneshot(get("/", None)).await.unwrap()).await;
    assert!(html.contains("Showing 2 of 7 products"));

    let html = body_text(app.oneshot(get("/?q=", None)).await.unwrap()).await;
    assert!(html.contains("Showing 7 of 7 products"));
}

#[tokio::test]
async fn test_search_without_matches() {
    let html = body_text(test_app().oneshot(get("/?q=99999", None)).await.unwrap()).await;
    assert!(html.contains("Showing 0 of 7 products"));
}

#[tokio::test]
async fn test_show_orders() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_form("/view", "option=Orders", None))
        .await
        .unwrap();
    assert_redirects_home(&response);

    let html = body_text(app.oneshot(get("/", None)).await.unwrap()).await;
    assert!(html.contains("Showing 7 of 7 orders"));
    assert!(html.contains("#10010"));
    assert!(html.contains("bg-orange-100 text-orange-800"));
}

#[tokio::test]
async fn test_sort_by_name() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_form("/sort", "option=Name+Z-A", None))
        .await
        .unwrap();
    assert_redirects_home(&response);

    let html = body_text(app.oneshot(get("/", None)).await.unwrap()).await;
    assert!(html.contains(r#"<option value="Name Z-A" selected>"#));
}

#[tokio::test]
async fn test_unknown_option_is_rejected() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_form("/view", "option=Everything", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(post_form("/sort", "option=Random", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_static_placeholder_is_served() {
    let response = test_app()
        .oneshot(get("/static/img/placeholder.svg", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_page_renders_under_shared_read_lock() {
    let state = AppState::new(test_config());
    let app = routes::app(state.clone());
    let _reader = state.dashboard().read().await;

    let response = tokio::time::timeout(Duration::from_secs(5), app.oneshot(get("/", None)))
        .await
        .expect("rendering without a query must not wait for the write lock")
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_body_cells_follow_column_visibility() {
    let app = test_app();

    // Brand, Product ID and Variants are desktop-only: one header cell plus one per row.
    let html = body_text(app.clone().oneshot(get("/", None)).await.unwrap()).await;
    assert_eq!(html.matches(" hidden lg:table-cell").count(), 3 * (7 + 1));
    assert!(html.contains(r#"<td class="px-6 py-4 whitespace-nowrap text-sm hidden lg:table-cell"><span class="text-gray-500">Uniqlo</span>"#));

    app.clone()
        .oneshot(post_form("/view", "option=Orders", None))
        .await
        .unwrap();
    let html = body_text(app.oneshot(get("/", None)).await.unwrap()).await;
    assert_eq!(html.matches(" hidden lg:table-cell").count(), 0);
    assert!(html.contains("Ronald Bennett"));
}
