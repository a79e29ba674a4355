// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod numbering_tests;

use rust_decimal::Decimal;
use tradeflow_domain::{
    DocumentBody, Estimate, EstimateStatus, NewDocument, Priority, TenantId, Totals, WorkOrder,
    WorkOrderStatus,
};

use crate::Persistence;

/// Opens an in-memory store holding one tenant and a profile `user-1` for it.
pub fn setup() -> (Persistence, TenantId) {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let tenant: TenantId = persistence.create_tenant("Northside Plumbing").unwrap();
    persistence.upsert_profile("user-1", Some(tenant)).unwrap();
    (persistence, tenant)
}

pub fn estimate_body(subtotal: Decimal) -> DocumentBody {
    DocumentBody::Estimate(Estimate {
        title: String::from("Kitchen rewire"),
        description: Some(String::from("Replace consumer unit")),
        customer_id: 12,
        customer_site_id: Some(3),
        status: EstimateStatus::Approved,
        totals: Totals::compute(subtotal, Decimal::new(825, 2)).unwrap(),
    })
}

pub fn work_order_body(status: WorkOrderStatus) -> DocumentBody {
    DocumentBody::WorkOrder(WorkOrder {
        title: String::from("Fix leak"),
        description: None,
        customer_id: 12,
        customer_site_id: None,
        project_id: None,
        status,
        priority: Priority::High,
        notes: Some(String::from("Back door key under mat")),
        completed_date: None,
    })
}

pub fn new_document(tenant: TenantId, number: &str, body: DocumentBody) -> NewDocument {
    NewDocument {
        tenant_id: tenant,
        number: number.to_string(),
        conversion_key: None,
        body,
    }
}
