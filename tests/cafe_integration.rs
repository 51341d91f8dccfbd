//! Integration tests for the cafe listing endpoint
//!
//! These tests drive the full router and verify:
//! - City and count validation with their plain-text errors
//! - Count limiting and case-insensitive search
//! - Serving a catalog loaded from JSON

use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use cafe_service::cafe::{AppState, Catalog};
use cafe_service::router::create_app_router;

/// Helper function to create a test app instance
fn create_test_app() -> axum::Router {
    create_app_router(Arc::new(AppState::new()))
}

/// Sends `GET uri` and returns the status and the trimmed body
async fn get(app: &axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(body_bytes.to_vec()).unwrap();

    (status, body.trim().to_string())
}

/// Builds a `/cafe` URI with the given query parameters, form-encoded
fn cafe_uri(params: &[(&str, &str)]) -> String {
    format!("/cafe?{}", serde_urlencoded::to_string(params).unwrap())
}

fn split(body: &str) -> Vec<&str> {
    if body.is_empty() {
        Vec::new()
    } else {
        body.split(',').collect()
    }
}

#[tokio::test]
async fn test_cafe_negative() {
    let app = create_test_app();

    let cases = [
        ("/cafe", "unknown city"),
        ("/cafe?city=", "unknown city"),
        ("/cafe?city=omsk", "unknown city"),
        ("/cafe?city=tula&count=na", "incorrect count"),
        ("/cafe?city=moscow&count=-1", "incorrect count"),
    ];

    for (uri, message) in cases {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, message, "{uri}");
    }
}

#[tokio::test]
async fn test_cafe_when_ok() {
    let app = create_test_app();

    let uris = [
        "/cafe?count=2&city=moscow".to_string(),
        "/cafe?city=tula".to_string(),
        cafe_uri(&[("city", "moscow"), ("search", "ложка")]),
        "/cafe?city=moscow&count=".to_string(),
    ];

    for uri in &uris {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_cafe_all_in_catalog_order() {
    let app = create_test_app();

    let (status, body) = get(&app, "/cafe?city=moscow").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "кафе1,вилка,кофе-хауз,кофе с собой,ложка");
}

#[tokio::test]
async fn test_cafe_count() {
    let app = create_test_app();

    for (count, want) in [(0, 0), (1, 1), (2, 2), (5, 5), (100, 5)] {
        let (status, body) = get(&app, &format!("/cafe?city=moscow&count={count}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(split(&body).len(), want, "count={count}");
    }

    let (_, body) = get(&app, "/cafe?city=moscow&count=2").await;
    assert_eq!(body, "кафе1,вилка");
}

#[tokio::test]
async fn test_cafe_search() {
    let app = create_test_app();

    for (search, want) in [("фалось", 0), ("кофе", 2), ("вилка", 1), ("КОФЕ", 2)] {
        let uri = cafe_uri(&[("city", "moscow"), ("search", search)]);
        let (status, body) = get(&app, &uri).await;
        assert_eq!(status, StatusCode::OK);

        let names = split(&body);
        assert_eq!(names.len(), want, "search={search}");
        for name in names {
            assert!(name.to_lowercase().contains(&search.to_lowercase()));
        }
    }

    let uri = cafe_uri(&[("city", "moscow"), ("search", "кофе")]);
    let (_, body) = get(&app, &uri).await;
    assert_eq!(body, "кофе-хауз,кофе с собой");
}

#[tokio::test]
async fn test_cafe_search_with_count() {
    let app = create_test_app();

    let uri = cafe_uri(&[("city", "moscow"), ("search", "кофе"), ("count", "1")]);
    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "кофе-хауз");
}

#[tokio::test]
async fn test_cafe_is_idempotent() {
    let app = create_test_app();

    let uri = cafe_uri(&[("city", "moscow"), ("search", "к"), ("count", "3")]);
    let first = get(&app, &uri).await;
    let second = get(&app, &uri).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_cafe_search_with_space() {
    let app = create_test_app();

    let uri = cafe_uri(&[("city", "moscow"), ("search", "с собой")]);
    assert!(uri.contains("+"), "{uri}");

    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "кофе с собой");
}

#[tokio::test]
async fn test_cafe_rejects_other_methods() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/cafe?city=moscow")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = get(&app, "/cafes?city=moscow").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cafe_with_json_catalog() {
    let catalog = Catalog::from_json_str(r#"{"Kazan": ["Чак-чак", "Эчпочмак", "Кофе Бар"]}"#)
        .unwrap();
    let app = create_app_router(Arc::new(AppState::with_catalog(catalog)));

    let (status, body) = get(&app, "/cafe?city=kazan").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Чак-чак,Эчпочмак,Кофе Бар");

    let (status, body) = get(&app, "/cafe?city=moscow").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "unknown city");
}
