//! Integration tests for the style and call-type catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: GET /styles returns the five styles in catalog order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn styles_returns_catalog_in_order() {
    let app = common::build_test_app();
    let response = get(app, "/styles").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let styles = json["styles"].as_array().expect("styles must be an array");

    let ids: Vec<&str> = styles.iter().map(|s| s["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        [
            "telegram-ui",
            "telegram-dark",
            "telegram-light",
            "ios-style",
            "android-style",
        ]
    );
}

// ---------------------------------------------------------------------------
// Test: Style entries carry localized names and descriptions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn styles_entries_have_names_and_descriptions() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/styles").await).await;
    let styles = json["styles"].as_array().unwrap();

    assert_eq!(styles[0]["name"], "Telegram UI");
    assert_eq!(styles[0]["description"], "Стандартный интерфейс Telegram");

    for style in styles {
        assert!(!style["name"].as_str().unwrap().is_empty());
        assert!(!style["description"].as_str().unwrap().is_empty());
    }
}

// ---------------------------------------------------------------------------
// Test: GET /call-types returns the three call kinds with colors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn call_types_returns_three_kinds_with_colors() {
    let app = common::build_test_app();
    let response = get(app, "/call-types").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let call_types = json["call_types"]
        .as_array()
        .expect("call_types must be an array");

    assert_eq!(call_types.len(), 3);

    assert_eq!(call_types[0]["id"], "incoming");
    assert_eq!(call_types[0]["name"], "Входящий");
    assert_eq!(call_types[0]["color"], "green");

    assert_eq!(call_types[1]["id"], "outgoing");
    assert_eq!(call_types[1]["name"], "Исходящий");
    assert_eq!(call_types[1]["color"], "blue");

    assert_eq!(call_types[2]["id"], "missed");
    assert_eq!(call_types[2]["name"], "Пропущенный");
    assert_eq!(call_types[2]["color"], "red");
}
