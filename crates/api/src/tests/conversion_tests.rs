// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;
use tradeflow::CallerIdentity;
use tradeflow_domain::{DocumentBody, DocumentKind, InvoiceAmounts};

use super::helpers::{create_from_json, create_test_caller, estimate_json, setup, test_now};
use crate::{
    ApiError, ConversionResponse, ConvertRequest, ConvertWorkOrderRequest, UpdateStatusRequest,
    convert_estimate_to_project, convert_project_to_work_order, convert_work_order_to_invoice,
    update_status,
};

#[test]
fn test_full_lifecycle_through_the_api() {
    let (mut persistence, _) = setup();
    let caller: CallerIdentity = create_test_caller();
    let estimate = create_from_json(&mut persistence, &caller, estimate_json("2000.00"));

    let project: ConversionResponse = convert_estimate_to_project(
        &mut persistence,
        Some(&caller),
        &ConvertRequest {
            source_id: estimate.id,
        },
        test_now(),
    )
    .unwrap();
    assert_eq!(project.source.status, "converted");
    assert_eq!(project.target.kind, DocumentKind::Project);
    assert_eq!(project.target.number, "PROJ-2024-0001");
    assert!(project.target.conversion_key.is_some());

    let work_order: ConversionResponse = convert_project_to_work_order(
        &mut persistence,
        Some(&caller),
        &ConvertRequest {
            source_id: project.target.id,
        },
        test_now(),
    )
    .unwrap();
    assert_eq!(work_order.target.number, "WO-2024-0001");
    assert_eq!(work_order.target.status, "open");

    update_status(
        &mut persistence,
        Some(&caller),
        &UpdateStatusRequest {
            kind: String::from("work_order"),
            id: work_order.target.id,
            status: String::from("completed"),
        },
        test_now(),
    )
    .unwrap();

    let invoice: ConversionResponse = convert_work_order_to_invoice(
        &mut persistence,
        Some(&caller),
        &ConvertWorkOrderRequest {
            source_id: work_order.target.id,
            amounts: InvoiceAmounts {
                labor_total: Some(Decimal::new(500, 0)),
                materials_total: Some(Decimal::new(250, 0)),
                tax_rate: None,
            },
        },
        test_now(),
    )
    .unwrap();
    assert_eq!(invoice.source.status, "converted");
    assert_eq!(invoice.target.number, "INV-2024-0001");
    let DocumentBody::Invoice(body) = &invoice.target.body else {
        panic!("Expected an invoice");
    };
    assert_eq!(body.totals.total_amount, Decimal::new(750, 0));
}

#[test]
fn test_repeated_conversion_reports_resumed() {
    let (mut persistence, _) = setup();
    let caller: CallerIdentity = create_test_caller();
    let estimate = create_from_json(&mut persistence, &caller, estimate_json("10"));
    let request: ConvertRequest = ConvertRequest {
        source_id: estimate.id,
    };

    let first: ConversionResponse =
        convert_estimate_to_project(&mut persistence, Some(&caller), &request, test_now())
            .unwrap();
    let second: ConversionResponse =
        convert_estimate_to_project(&mut persistence, Some(&caller), &request, test_now())
            .unwrap();

    assert!(!first.resumed);
    assert!(second.resumed);
    assert_eq!(first.target.id, second.target.id);
}

#[test]
fn test_invoicing_open_work_order_is_a_rule_violation() {
    let (mut persistence, _) = setup();
    let caller: CallerIdentity = create_test_caller();
    let work_order = create_from_json(
        &mut persistence,
        &caller,
        super::helpers::work_order_json(),
    );

    let result = convert_work_order_to_invoice(
        &mut persistence,
        Some(&caller),
        &ConvertWorkOrderRequest {
            source_id: work_order.id,
            amounts: InvoiceAmounts::default(),
        },
        test_now(),
    );
    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_converting_missing_source_is_not_found() {
    let (mut persistence, _) = setup();

    let result = convert_project_to_work_order(
        &mut persistence,
        Some(&create_test_caller()),
        &ConvertRequest { source_id: 999 },
        test_now(),
    );
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "project"
    ));
}

#[test]
fn test_convert_work_order_request_reads_flat_amounts() {
    let request: ConvertWorkOrderRequest = serde_json::from_value(serde_json::json!({
        "source_id": 4,
        "labor_total": "120.50",
        "tax_rate": "7"
    }))
    .unwrap();

    assert_eq!(request.source_id, 4);
    assert_eq!(request.amounts.labor_total, Some(Decimal::new(12_050, 2)));
    assert_eq!(request.amounts.materials_total, None);
    assert_eq!(request.amounts.tax_rate, Some(Decimal::new(7, 0)));
}
