// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::RunQueryDsl;
use tradeflow::{StoreError, load_numbering_config, update_numbering_config};
use tradeflow_domain::{
    DocumentKind, StoredKindNumbering, StoredNumberingConfig, TenantNumberingConfig,
};

use super::setup;
use crate::BackendConnection;
use crate::error::PersistenceError;

#[test]
fn test_missing_config_reads_as_none() {
    let (mut persistence, tenant) = setup();
    assert_eq!(persistence.get_numbering_config(tenant).unwrap(), None);
}

#[test]
fn test_save_and_reload_config() {
    let (mut persistence, tenant) = setup();
    let mut config: StoredNumberingConfig = StoredNumberingConfig::default();
    config.invoice = StoredKindNumbering {
        prefix: Some(String::from("BILL")),
        format: Some(String::from("BILL/{YY}/{#####}")),
        next_counter: Some(12),
    };
    config.work_order.next_counter = Some(3);

    persistence.save_numbering_config(tenant, &config).unwrap();
    assert_eq!(
        persistence.get_numbering_config(tenant).unwrap(),
        Some(config.clone())
    );

    config.invoice.next_counter = Some(13);
    persistence.save_numbering_config(tenant, &config).unwrap();
    assert_eq!(
        persistence
            .get_numbering_config(tenant)
            .unwrap()
            .map(|c| c.invoice.next_counter),
        Some(Some(13))
    );
}

#[test]
fn test_update_numbering_config_through_engine() {
    let (mut persistence, tenant) = setup();

    update_numbering_config(
        &mut persistence,
        tenant,
        DocumentKind::Estimate,
        Some(String::from("Q")),
        Some(String::from("{PREFIX}-{####}")),
    )
    .unwrap();

    let config: TenantNumberingConfig = load_numbering_config(&mut persistence, tenant).unwrap();
    assert_eq!(config.estimate.prefix, "Q");
    assert_eq!(config.estimate.format, "{PREFIX}-{####}");
    assert_eq!(config.project, TenantNumberingConfig::defaults().project);
}

#[test]
fn test_negative_counter_is_corrupt() {
    let (mut persistence, tenant) = setup();
    let BackendConnection::Sqlite(conn) = &mut persistence.conn else {
        panic!("Expected SQLite");
    };
    diesel::sql_query(format!(
        "INSERT INTO numbering_configs (tenant_id, document_kind, next_counter) \
         VALUES ({}, 'invoice', -4)",
        tenant.value()
    ))
    .execute(conn)
    .unwrap();

    let result = persistence.get_numbering_config(tenant);
    assert!(matches!(
        result,
        Err(PersistenceError::InvalidStoredValue {
            column: "next_counter",
            ..
        })
    ));
    let as_store: StoreError = result.unwrap_err().into();
    assert!(matches!(as_store, StoreError::Corrupt { .. }));
}

#[test]
fn test_unknown_kind_rows_are_skipped() {
    let (mut persistence, tenant) = setup();
    let BackendConnection::Sqlite(conn) = &mut persistence.conn else {
        panic!("Expected SQLite");
    };
    diesel::sql_query(format!(
        "INSERT INTO numbering_configs (tenant_id, document_kind, prefix) \
         VALUES ({}, 'credit_note', 'CN')",
        tenant.value()
    ))
    .execute(conn)
    .unwrap();

    assert_eq!(
        persistence.get_numbering_config(tenant).unwrap(),
        Some(StoredNumberingConfig::default())
    );
}
