//! JSON listings and navbar preferences.

use axum::http::StatusCode;
use stockroom_integration_tests::{
    assert_redirects_home, body_json, body_text, get, post_form, session_cookie, test_app,
};
use tower::ServiceExt;

#[tokio::test]
async fn test_products_listing() {
    let response = test_app().oneshot(get("/api/products", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(response).await;
    assert_eq!(list["total"], 7);
    assert_eq!(list["visible"], 7);
    assert_eq!(list["summary"], "Showing 7 of 7 products");
}

#[tokio::test]
async fn test_listing_query_leaves_dashboard_search() {
    let app = test_app();

    let list = body_json(app.clone().oneshot(get("/api/products?q=zara", None)).await.unwrap()).await;
    assert_eq!(list["visible"], 2);

    let html = body_text(app.oneshot(get("/", None)).await.unwrap()).await;
    assert!(html.contains("Showing 7 of 7 products"));
}

#[tokio::test]
async fn test_listing_follows_dashboard_search() {
    let app = test_app();

    app.clone().oneshot(get("/?q=zara", None)).await.unwrap();
    let list = body_json(app.oneshot(get("/api/products", None)).await.unwrap()).await;
    assert_eq!(list["summary"], "Showing 2 of 7 products");
}

#[tokio::test]
async fn test_orders_listing() {
    let list = body_json(
        test_app()
            .oneshot(get("/api/orders?q=rosa", None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(list["total"], 7);
    assert_eq!(list["visible"], 1);
    assert_eq!(list["orders"][0]["payment"], "Paid");
}

#[tokio::test]
async fn test_dark_mode_persists_in_session() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_form("/api/preferences/dark-mode", "", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response).unwrap();
    let prefs = body_json(response).await;
    assert_eq!(prefs["dark_mode"], true);
    assert_eq!(prefs["mobile_menu_open"], false);

    let html = body_text(app.clone().oneshot(get("/", Some(&cookie))).await.unwrap()).await;
    assert!(html.contains(r#"<html lang="en" class="dark">"#));

    let html = body_text(app.oneshot(get("/", None)).await.unwrap()).await;
    assert!(html.contains(r#"<html lang="en">"#));
}

#[tokio::test]
async fn test_mobile_menu_toggle() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_form("/navbar/menu", "", None))
        .await
        .unwrap();
    assert_redirects_home(&response);
    let cookie = session_cookie(&response).unwrap();

    let html = body_text(app.oneshot(get("/", Some(&cookie))).await.unwrap()).await;
    assert!(html.contains(r#"aria-expanded="true""#));
}
