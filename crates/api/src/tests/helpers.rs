// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use time::OffsetDateTime;
use time::macros::datetime;
use tradeflow::CallerIdentity;
use tradeflow_domain::TenantId;
use tradeflow_persistence::Persistence;

use crate::{CreateDocumentRequest, DocumentInfo, create_document};

pub fn test_now() -> OffsetDateTime {
    datetime!(2024-03-15 10:00:00 UTC)
}

pub fn create_test_caller() -> CallerIdentity {
    CallerIdentity::new("dispatcher-1")
}

/// An in-memory store with one tenant and a profile for
/// [`create_test_caller`].
pub fn setup() -> (Persistence, TenantId) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let tenant: TenantId = persistence.create_tenant("Harbor Electric").unwrap();
    persistence
        .upsert_profile(create_test_caller().user_id(), Some(tenant))
        .unwrap();
    (persistence, tenant)
}

/// Creates a document from its JSON body through the API.
pub fn create_from_json(
    persistence: &mut Persistence,
    caller: &CallerIdentity,
    document: serde_json::Value,
) -> DocumentInfo {
    let request: CreateDocumentRequest = serde_json::from_value(serde_json::json!({
        "document": document,
    }))
    .unwrap();
    create_document(persistence, Some(caller), request, test_now()).unwrap()
}

pub fn estimate_json(subtotal: &str) -> serde_json::Value {
    serde_json::json!({
        "kind": "estimate",
        "title": "Panel upgrade",
        "description": null,
        "customer_id": 40,
        "customer_site_id": 2,
        "status": "approved",
        "totals": {
            "subtotal": subtotal,
            "tax_rate": "10",
            "tax_amount": "0",
            "total_amount": "0"
        }
    })
}

pub fn work_order_json() -> serde_json::Value {
    serde_json::json!({
        "kind": "work_order",
        "title": "Replace breaker",
        "description": null,
        "customer_id": 40,
        "customer_site_id": null,
        "project_id": null,
        "status": "open",
        "priority": "high",
        "notes": null,
        "completed_date": null
    })
}
