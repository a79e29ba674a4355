// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::date;
use tradeflow_domain::{
    DocumentBody, DocumentKind, DomainError, StoredKindNumbering, StoredNumberingConfig,
    TenantNumberingConfig,
};

use super::helpers::{InMemoryStore, TENANT, sample_work_order, test_now};
use crate::{
    Allocation, CoreError, StoreError, allocate, confirm_allocation, create_document,
    load_numbering_config, update_numbering_config,
};

#[test]
fn test_allocate_on_empty_tenant_returns_one() {
    let mut store: InMemoryStore = InMemoryStore::new();

    let allocation: Allocation =
        allocate(&mut store, TENANT, DocumentKind::WorkOrder, date!(2024 - 01 - 01)).unwrap();

    assert_eq!(allocation.sequence, 1);
    assert_eq!(allocation.number, "WO-2024-0001");
}

#[test]
fn test_allocate_follows_highest_used_not_stale_counter() {
    let mut store: InMemoryStore = InMemoryStore::new();
    store.insert_number(TENANT, DocumentKind::WorkOrder, "WO-2024-0041");
    let mut stored: StoredNumberingConfig = StoredNumberingConfig::default();
    stored.work_order.next_counter = Some(3);
    store.configs.insert(TENANT, stored);

    let allocation: Allocation =
        allocate(&mut store, TENANT, DocumentKind::WorkOrder, date!(2024 - 06 - 01)).unwrap();

    assert_eq!(allocation.sequence, 42);
    assert_eq!(allocation.number, "WO-2024-0042");
}

#[test]
fn test_allocate_ignores_counter_ahead_of_documents() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let mut stored: StoredNumberingConfig = StoredNumberingConfig::default();
    stored.invoice.next_counter = Some(900);
    store.configs.insert(TENANT, stored);

    let allocation: Allocation =
        allocate(&mut store, TENANT, DocumentKind::Invoice, date!(2024 - 06 - 01)).unwrap();

    assert_eq!(allocation.sequence, 1);
}

#[test]
fn test_allocate_uses_stored_format_merged_with_defaults() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let mut stored: StoredNumberingConfig = StoredNumberingConfig::default();
    stored.estimate = StoredKindNumbering {
        prefix: Some(String::from("Q")),
        format: Some(String::from("{PREFIX}{YY}-{###}")),
        next_counter: None,
    };
    store.configs.insert(TENANT, stored);

    let allocation: Allocation =
        allocate(&mut store, TENANT, DocumentKind::Estimate, date!(2025 - 02 - 10)).unwrap();

    assert_eq!(allocation.number, "Q25-001");

    let other: Allocation =
        allocate(&mut store, TENANT, DocumentKind::Project, date!(2025 - 02 - 10)).unwrap();
    assert_eq!(other.number, "PROJ-2025-0001");
}

#[test]
fn test_allocate_propagates_store_failure() {
    let mut store: InMemoryStore = InMemoryStore::new();
    store.fail.list_numbers = true;

    let result = allocate(&mut store, TENANT, DocumentKind::WorkOrder, date!(2024 - 01 - 01));
    assert!(matches!(result, Err(CoreError::Store(_))));
}

#[test]
fn test_uncommitted_allocations_race_to_the_same_number() {
    let mut store: InMemoryStore = InMemoryStore::new();

    let first: Allocation =
        allocate(&mut store, TENANT, DocumentKind::WorkOrder, date!(2024 - 01 - 01)).unwrap();
    let second: Allocation =
        allocate(&mut store, TENANT, DocumentKind::WorkOrder, date!(2024 - 01 - 01)).unwrap();

    assert_eq!(first.sequence, 1);
    assert_eq!(second.sequence, 1);
    assert_eq!(first.number, second.number);

    create_document(
        &mut store,
        TENANT,
        DocumentBody::WorkOrder(sample_work_order()),
        Some(first.number),
        test_now(),
    )
    .unwrap();
    let losing = create_document(
        &mut store,
        TENANT,
        DocumentBody::WorkOrder(sample_work_order()),
        Some(second.number),
        test_now(),
    );
    assert!(matches!(
        losing,
        Err(CoreError::Store(StoreError::Conflict { .. }))
    ));
}

#[test]
fn test_confirm_allocation_advances_counter() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let allocation: Allocation = Allocation {
        kind: DocumentKind::PurchaseOrder,
        number: String::from("PO-2024-0005"),
        sequence: 5,
    };

    confirm_allocation(&mut store, TENANT, &allocation).unwrap();

    let config: TenantNumberingConfig = load_numbering_config(&mut store, TENANT).unwrap();
    assert_eq!(config.purchase_order.next_counter, 6);
    assert_eq!(config.work_order.next_counter, 1);
}

#[test]
fn test_confirm_allocation_never_lowers_counter() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let mut stored: StoredNumberingConfig = StoredNumberingConfig::default();
    stored.estimate.next_counter = Some(50);
    store.configs.insert(TENANT, stored);
    let allocation: Allocation = Allocation {
        kind: DocumentKind::Estimate,
        number: String::from("EST-2024-0005"),
        sequence: 5,
    };

    confirm_allocation(&mut store, TENANT, &allocation).unwrap();

    let config: TenantNumberingConfig = load_numbering_config(&mut store, TENANT).unwrap();
    assert_eq!(config.estimate.next_counter, 50);
}

#[test]
fn test_confirm_allocation_at_last_sequence_fails() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let allocation: Allocation = Allocation {
        kind: DocumentKind::Estimate,
        number: String::from("EST-18446744073709551615"),
        sequence: u64::MAX,
    };

    let result = confirm_allocation(&mut store, TENANT, &allocation);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::SequenceOutOfRange { .. }))
    ));
    assert!(store.configs.is_empty());
}

#[test]
fn test_allocate_skips_number_at_last_sequence() {
    let mut store: InMemoryStore = InMemoryStore::new();
    store.insert_number(TENANT, DocumentKind::Estimate, "EST-18446744073709551615");

    let allocation: Allocation =
        allocate(&mut store, TENANT, DocumentKind::Estimate, date!(2024 - 06 - 01)).unwrap();

    assert_eq!(allocation.sequence, 1);
}

#[test]
fn test_load_numbering_config_defaults() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let config: TenantNumberingConfig = load_numbering_config(&mut store, TENANT).unwrap();
    assert_eq!(config, TenantNumberingConfig::defaults());
}

#[test]
fn test_update_numbering_config_keeps_other_fields() {
    let mut store: InMemoryStore = InMemoryStore::new();

    update_numbering_config(
        &mut store,
        TENANT,
        DocumentKind::WorkOrder,
        None,
        Some(String::from("JOB-{####}")),
    )
    .unwrap();
    let config: TenantNumberingConfig = update_numbering_config(
        &mut store,
        TENANT,
        DocumentKind::WorkOrder,
        Some(String::from("JOB")),
        None,
    )
    .unwrap();

    assert_eq!(config.work_order.format, "JOB-{####}");
    assert_eq!(config.work_order.prefix, "JOB");
    assert_eq!(config.invoice.format, "INV-{YYYY}-{####}");
}

#[test]
fn test_update_numbering_config_rejects_blank_format() {
    let mut store: InMemoryStore = InMemoryStore::new();

    let result = update_numbering_config(
        &mut store,
        TENANT,
        DocumentKind::Invoice,
        None,
        Some(String::from("")),
    );
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidNumberFormat { .. }
        ))
    ));
    assert!(store.configs.is_empty());
}
