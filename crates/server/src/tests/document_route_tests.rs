// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{Router, http::StatusCode};

use super::helpers::{DISPATCHER, create_test_app, estimate_document, send, work_order_document};

#[tokio::test]
async fn test_allocate_without_identity_is_unauthorized() {
    let app: Router = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/numbers/allocate",
        None,
        Some(serde_json::json!({ "kind": "work_order" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_allocate_for_unknown_user_is_forbidden() {
    let app: Router = create_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/numbers/allocate",
        Some("stranger"),
        Some(serde_json::json!({ "kind": "work_order" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_allocate_returns_first_number() {
    let app: Router = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/numbers/allocate",
        Some(DISPATCHER),
        Some(serde_json::json!({ "kind": "work_order" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sequence"], 1);
    let number: &str = body["number"].as_str().unwrap();
    assert!(number.starts_with("WO-"));
    assert!(number.ends_with("-0001"));
}

#[tokio::test]
async fn test_allocate_unknown_kind_is_bad_request() {
    let app: Router = create_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/numbers/allocate",
        Some(DISPATCHER),
        Some(serde_json::json!({ "kind": "quote" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_then_get_document() {
    let app: Router = create_test_app();

    let (status, created) = send(
        &app,
        "POST",
        "/documents",
        Some(DISPATCHER),
        Some(serde_json::json!({ "document": work_order_document() })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "open");

    let id: i64 = created["id"].as_i64().unwrap();
    let (status, fetched) = send(
        &app,
        "GET",
        &format!("/documents/work_order/{id}"),
        Some(DISPATCHER),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["number"], created["number"]);
}

#[tokio::test]
async fn test_get_missing_document_is_not_found() {
    let app: Router = create_test_app();

    let (status, _) = send(&app, "GET", "/documents/invoice/42", Some(DISPATCHER), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_number_is_conflict() {
    let app: Router = create_test_app();
    let request = serde_json::json!({
        "number": "WO-2024-0007",
        "document": work_order_document(),
    });

    let (first, _) = send(
        &app,
        "POST",
        "/documents",
        Some(DISPATCHER),
        Some(request.clone()),
    )
    .await;
    let (second, _) = send(&app, "POST", "/documents", Some(DISPATCHER), Some(request)).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_status_update_and_bad_status() {
    let app: Router = create_test_app();
    let (_, created) = send(
        &app,
        "POST",
        "/documents",
        Some(DISPATCHER),
        Some(serde_json::json!({ "document": estimate_document("120.00") })),
    )
    .await;
    let id: i64 = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "POST",
        "/documents/status",
        Some(DISPATCHER),
        Some(serde_json::json!({ "kind": "estimate", "id": id, "status": "sent" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "sent");

    let (status, _) = send(
        &app,
        "POST",
        "/documents/status",
        Some(DISPATCHER),
        Some(serde_json::json!({ "kind": "estimate", "id": id, "status": "scheduled" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_numbering_update_is_visible_on_read() {
    let app: Router = create_test_app();

    let (status, _) = send(
        &app,
        "PUT",
        "/numbering",
        Some(DISPATCHER),
        Some(serde_json::json!({ "kind": "purchase_order", "prefix": "BUY" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, config) = send(&app, "GET", "/numbering", Some(DISPATCHER), None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = config["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 5);
    let purchase_order = entries
        .iter()
        .find(|e| e["kind"] == "purchase_order")
        .unwrap();
    assert_eq!(purchase_order["prefix"], "BUY");
}
