//! Integration tests for Stockroom.
//!
//! The admin router is driven in-process with `tower::ServiceExt::oneshot`,
//! so no server or network is needed:
//!
//! ```bash
//! cargo test -p stockroom-integration-tests
//! ```
//!
//! Each test builds its own [`test_app`], which owns a freshly seeded
//! dashboard and session store.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use stockroom_admin::{AdminConfig, AppState, routes};

/// Config pointing at the admin crate's static directory.
///
/// The drawer fallback timer is long enough that it never fires mid-test;
/// tests of the timer itself shorten it.
#[must_use]
pub fn test_config() -> AdminConfig {
    AdminConfig {
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../admin/static").to_string(),
        modal_transition: Duration::from_secs(30),
        ..AdminConfig::default()
    }
}

/// A full admin app over the seed data.
#[must_use]
pub fn test_app() -> Router {
    test_app_with(test_config())
}

/// A full admin app with a custom config.
#[must_use]
pub fn test_app_with(config: AdminConfig) -> Router {
    routes::app(AppState::new(config))
}

/// `GET uri`, optionally with a session cookie.
#[must_use]
pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// `POST uri` with an urlencoded form body.
#[must_use]
pub fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

/// Read a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `name=value` pair of a `Set-Cookie` header, for sending back.
#[must_use]
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    let value = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    value.split(';').next().map(str::to_string)
}

/// Assert a form post answered with a redirect back to the dashboard.
pub fn assert_redirects_home(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/")
    );
}

/// Value of the first `name="..."` attribute in rendered HTML.
#[must_use]
pub fn attr_value<'a>(html: &'a str, name: &str) -> Option<&'a str> {
    let marker = format!("{name}=\"");
    let start = html.find(&marker)? + marker.len();
    let len = html.get(start..)?.find('"')?;
    html.get(start..start + len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_value() {
        let html = r#"<div data-phase="opening" data-generation="3">"#;
        assert_eq!(attr_value(html, "data-generation"), Some("3"));
        assert_eq!(attr_value(html, "data-phase"), Some("opening"));
        assert_eq!(attr_value(html, "data-missing"), None);
    }
}
