// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tradeflow::{CoreError, StoreError};
use tradeflow_domain::{DocumentId, DocumentKind, DomainError};

use crate::{ApiError, RequestError, translate_core_error, translate_domain_error};

#[test]
fn test_store_conflict_maps_to_conflict() {
    let err: ApiError = translate_core_error(CoreError::Store(StoreError::Conflict {
        message: String::from("WO-2024-0001 already exists"),
    }));
    assert_eq!(
        err,
        ApiError::Conflict {
            message: String::from("WO-2024-0001 already exists"),
        }
    );
}

#[test]
fn test_backend_failure_keeps_store_message() {
    let err: ApiError = translate_core_error(CoreError::Store(StoreError::backend("disk full")));
    let ApiError::Internal { message } = err else {
        panic!("Expected an internal error");
    };
    assert!(message.contains("disk full"));
}

#[test]
fn test_missing_document_maps_to_not_found() {
    let err: ApiError = translate_core_error(CoreError::DocumentNotFound {
        kind: DocumentKind::Invoice,
        id: DocumentId::new(3),
    });
    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "invoice"
    ));
}

#[test]
fn test_identity_failures() {
    assert!(matches!(
        translate_core_error(CoreError::Unauthenticated),
        ApiError::AuthenticationFailed { .. }
    ));
    assert!(matches!(
        translate_core_error(CoreError::TenantNotFound {
            user_id: String::from("u-9"),
        }),
        ApiError::NoTenantContext { ref message } if message.contains("u-9")
    ));
}

#[test]
fn test_conversion_refusal_is_a_rule_violation() {
    let err: ApiError = translate_domain_error(DomainError::ConversionNotAllowed {
        conversion: "work_order_to_invoice",
        status: "open",
        reason: "work order must be completed",
    });
    assert!(matches!(err, ApiError::DomainRuleViolation { .. }));
}

#[test]
fn test_negative_amount_names_its_field() {
    let err: ApiError = translate_domain_error(DomainError::NegativeAmount {
        field: "labor_total",
        value: String::from("-5"),
    });
    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "labor_total"
    ));
}

#[test]
fn test_request_error_becomes_invalid_input() {
    let err: ApiError = ApiError::from(RequestError::InvalidId(-1));
    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "id"
    ));
}
