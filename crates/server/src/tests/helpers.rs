// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;
use tradeflow_persistence::Persistence;

use crate::identity::USER_ID_HEADER;
use crate::{AppState, build_router};

pub const DISPATCHER: &str = "dispatcher-1";

/// Creates a router over an in-memory store holding one tenant, with
/// [`DISPATCHER`] attached to it.
pub fn create_test_app() -> Router {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    let tenant = persistence.create_tenant("Harbor Electric").unwrap();
    persistence.upsert_profile(DISPATCHER, Some(tenant)).unwrap();
    build_router(AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    })
}

/// Sends one request and returns the status and the parsed JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    user: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header(USER_ID_HEADER, user);
    }
    let request: Request<Body> = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

pub fn estimate_document(subtotal: &str) -> serde_json::Value {
    serde_json::json!({
        "kind": "estimate",
        "title": "Panel upgrade",
        "description": null,
        "customer_id": 40,
        "customer_site_id": null,
        "status": "draft",
        "totals": {
            "subtotal": subtotal,
            "tax_rate": "0",
            "tax_amount": "0",
            "total_amount": "0"
        }
    })
}

pub fn work_order_document() -> serde_json::Value {
    serde_json::json!({
        "kind": "work_order",
        "title": "Replace breaker",
        "description": null,
        "customer_id": 40,
        "customer_site_id": null,
        "project_id": null,
        "status": "open",
        "priority": "medium",
        "notes": null,
        "completed_date": null
    })
}
