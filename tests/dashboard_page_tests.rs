// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end tests for `GET /`.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use kleo_dashboard::time_utils::format_unix_seconds;
use tower::ServiceExt;

mod common;
use common::{create_test_app, spawn_happy_backend, spawn_stub_backend, StubReply};

async fn get_page(app: axum::Router) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_dashboard_renders_all_panels() {
    let backend = spawn_happy_backend().await;
    let (app, _state) = create_test_app(&backend.base_url);

    let (status, content_type, html) = get_page(app).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(html.contains("<h1>Dashboard</h1>"));

    // Panel order in the grid
    let total = html.find("Total Users").unwrap();
    let inactive = html.find("Inactive Users</h2>").unwrap();
    let old_cards = html.find("Users with Old Published Cards").unwrap();
    assert!(total < inactive && inactive < old_cards);

    assert!(html.contains(">42</p>"));
    assert!(html.contains("Total Inactive Users: 2"));
    assert!(html.contains("<td>alice</td>"));
    assert!(html.contains("<td>bob</td>"));
    assert!(html.contains("<td>carol</td>"));
    assert!(html.contains(&format_unix_seconds(1_609_459_200)));
}

#[tokio::test]
async fn test_backend_failure_still_renders_page() {
    let backend = spawn_stub_backend(
        StubReply::Status(StatusCode::INTERNAL_SERVER_ERROR),
        StubReply::Raw("<html>oops</html>"),
        StubReply::Status(StatusCode::SERVICE_UNAVAILABLE),
    )
    .await;
    let (app, _state) = create_test_app(&backend.base_url);

    let (status, _, html) = get_page(app).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<p class="stat">0</p>"#));
    assert!(html.contains("Total Inactive Users: 0"));
    assert!(!html.contains("<tr class=\"row-"));
    assert!(!html.contains("oops"));
}

#[tokio::test]
async fn test_each_page_load_fetches_once_per_panel() {
    let backend = spawn_happy_backend().await;
    let (app, _state) = create_test_app(&backend.base_url);

    get_page(app.clone()).await;
    assert_eq!(backend.hits.total(), [1, 1, 1]);

    get_page(app).await;
    assert_eq!(backend.hits.total(), [2, 2, 2]);
}

#[tokio::test]
async fn test_page_has_security_headers() {
    let backend = spawn_happy_backend().await;
    let (app, _state) = create_test_app(&backend.base_url);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("X-Content-Type-Options").unwrap(),
        "nosniff"
    );
    assert!(response
        .headers()
        .get("Content-Security-Policy")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("style-src 'unsafe-inline'"));
}
