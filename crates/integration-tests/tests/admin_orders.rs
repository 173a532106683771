//! Order rows, the details drawer and its transitions.

use std::time::Duration;

use axum::http::StatusCode;
use stockroom_admin::AdminConfig;
use stockroom_integration_tests::{
    assert_redirects_home, attr_value, body_json, body_text, get, post_form, test_app,
    test_app_with, test_config,
};
use tower::ServiceExt;

#[tokio::test]
async fn test_selecting_order_opens_details() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_form("/orders/3/select", "", None))
        .await
        .unwrap();
    assert_redirects_home(&response);

    let html = body_text(app.clone().oneshot(get("/", None)).await.unwrap()).await;
    assert_eq!(attr_value(&html, "data-phase"), Some("opening"));
    assert_eq!(attr_value(&html, "data-scroll-locked"), Some("true"));
    assert!(html.contains("#10012"));
    assert!(html.contains("(checkout #10012)"));
    assert!(html.contains("Unfulfilled (4)"));

    let list = body_json(app.oneshot(get("/api/orders?q=10012", None)).await.unwrap()).await;
    assert_eq!(list["orders"][0]["selected"], true);
}

#[tokio::test]
async fn test_view_details_keeps_selection() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_form("/orders/5/details", "", None))
        .await
        .unwrap();
    assert_redirects_home(&response);

    let html = body_text(app.clone().oneshot(get("/", None)).await.unwrap()).await;
    assert!(html.contains("#10014"));

    let list = body_json(app.oneshot(get("/api/orders?q=10014", None)).await.unwrap()).await;
    assert_eq!(list["orders"][0]["selected"], false);
}

#[tokio::test]
async fn test_transition_acknowledgment() {
    let app = test_app();

    app.clone()
        .oneshot(post_form("/orders/2/details", "", None))
        .await
        .unwrap();
    let html = body_text(app.clone().oneshot(get("/", None)).await.unwrap()).await;
    let generation = attr_value(&html, "data-generation").unwrap().to_string();

    let stale = body_json(
        app.clone()
            .oneshot(post_form("/orders/details/transition-end", "generation=999", None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(stale["completed"], false);
    assert_eq!(stale["phase"], "opening");

    let ack = body_json(
        app.clone()
            .oneshot(post_form(
                "/orders/details/transition-end",
                &format!("generation={generation}"),
                None,
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(ack["completed"], true);
    assert_eq!(ack["phase"], "open");

    let response = app
        .clone()
        .oneshot(post_form("/orders/details/close", "", None))
        .await
        .unwrap();
    assert_redirects_home(&response);
    let html = body_text(app.clone().oneshot(get("/", None)).await.unwrap()).await;
    assert_eq!(attr_value(&html, "data-phase"), Some("closing"));
    let generation = attr_value(&html, "data-generation").unwrap().to_string();

    let ack = body_json(
        app.clone()
            .oneshot(post_form(
                "/orders/details/transition-end",
                &format!("generation={generation}"),
                None,
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(ack["phase"], "closed");

    let html = body_text(app.oneshot(get("/", None)).await.unwrap()).await;
    assert!(!html.contains("order-details"));
    assert_eq!(attr_value(&html, "data-scroll-locked"), Some("false"));
}

#[tokio::test]
async fn test_fallback_timer_finishes_transition() {
    let app = test_app_with(AdminConfig {
        modal_transition: Duration::from_millis(20),
        ..test_config()
    });

    app.clone()
        .oneshot(post_form("/orders/1/details", "", None))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;

    let html = body_text(app.oneshot(get("/", None)).await.unwrap()).await;
    assert_eq!(attr_value(&html, "data-phase"), Some("open"));
}

#[tokio::test]
async fn test_fulfillment_dropdown() {
    let app = test_app();

    app.clone()
        .oneshot(post_form("/orders/4/details", "", None))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_form("/orders/details/fulfillment", "action=toggle", None))
        .await
        .unwrap();
    assert_redirects_home(&response);
    let html = body_text(app.clone().oneshot(get("/", None)).await.unwrap()).await;
    assert!(html.contains(r#"role="listbox""#));

    app.clone()
        .oneshot(post_form(
            "/orders/details/fulfillment",
            "action=choose&option=Same-day",
            None,
        ))
        .await
        .unwrap();
    let html = body_text(app.clone().oneshot(get("/", None)).await.unwrap()).await;
    assert!(!html.contains(r#"role="listbox""#));
    assert!(html.contains("Same-day &#9662;"));

    app.clone()
        .oneshot(post_form("/orders/details/fulfillment", "action=toggle", None))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_form("/orders/details/fulfillment", "action=outside", None))
        .await
        .unwrap();
    let html = body_text(app.oneshot(get("/", None)).await.unwrap()).await;
    assert!(!html.contains(r#"role="listbox""#));
}

#[tokio::test]
async fn test_fulfillment_rejects_unknown_input() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_form("/orders/details/fulfillment", "action=ship", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(post_form(
            "/orders/details/fulfillment",
            "action=choose&option=Drone",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_order_is_not_found() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_form("/orders/99/select", "", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(post_form("/orders/99/details", "", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
