//! Route-level tests for the preview server

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use chartgen::{ChartKind, Session, server};

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn index_serves_the_rendered_preview_page() {
    let session = Arc::new(Session::generate(ChartKind::Radar, None));
    let response = server::router(session).oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    let page = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(page.contains("type: 'radar'"));
    assert!(page.contains("text: 'Radar Chart'"));
    assert!(page.contains("https://cdn.jsdelivr.net/npm/chart.js"));
    assert!(!page.contains("{{chart_type}}"));
}

#[tokio::test]
async fn index_uses_the_line_tag_for_area_charts() {
    let session = Arc::new(Session::generate(ChartKind::Area, None));
    let response = server::router(session).oneshot(get("/")).await.unwrap();

    let page = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(page.contains("type: 'line'"));
    assert!(page.contains("text: 'Area Chart'"));
}

#[tokio::test]
async fn data_returns_the_session_dataset_verbatim() {
    let session = Arc::new(Session::generate(ChartKind::Bar, None));
    let expected = serde_json::to_vec(session.dataset()).unwrap();

    let response = server::router(session).oneshot(get("/data")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    // Byte-for-byte equality also pins the field order
    assert_eq!(body_bytes(response).await, expected);
}

#[tokio::test]
async fn data_omits_labels_for_point_charts() {
    let session = Arc::new(Session::generate(ChartKind::Scatter, None));
    let response = server::router(session).oneshot(get("/data")).await.unwrap();

    let value: serde_json::Value =
        serde_json::from_slice(&body_bytes(response).await).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("labels"));
    assert_eq!(object["datasets"][0]["data"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let session = Arc::new(Session::generate(ChartKind::Line, None));
    let response = server::router(session)
        .oneshot(get("/nope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
