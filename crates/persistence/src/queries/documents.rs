// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Document queries.
//!
//! Each document kind has its own table, so every query matches on
//! `DocumentKind` and runs the same statement against the right table. All
//! reads are scoped by `tenant_id`.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;
use tradeflow_domain::{DocumentId, DocumentKind, DocumentRecord, TenantId};
use uuid::Uuid;

use super::found;
use crate::diesel_schema::{estimates, invoices, projects, purchase_orders, work_orders};
use crate::error::PersistenceError;
use crate::rows::{EstimateRow, InvoiceRow, ProjectRow, PurchaseOrderRow, WorkOrderRow};

backend_fn! {
/// Lists every document number the tenant has used for `kind`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_document_numbers(
    conn: &mut _,
    tenant: TenantId,
    kind: DocumentKind,
) -> Result<Vec<String>, PersistenceError> {
    let tenant_id: i64 = tenant.value();
    let numbers: Vec<String> = match kind {
        DocumentKind::Estimate => estimates::table
            .filter(estimates::tenant_id.eq(tenant_id))
            .select(estimates::document_number)
            .load::<String>(conn)?,
        DocumentKind::Project => projects::table
            .filter(projects::tenant_id.eq(tenant_id))
            .select(projects::document_number)
            .load::<String>(conn)?,
        DocumentKind::WorkOrder => work_orders::table
            .filter(work_orders::tenant_id.eq(tenant_id))
            .select(work_orders::document_number)
            .load::<String>(conn)?,
        DocumentKind::Invoice => invoices::table
            .filter(invoices::tenant_id.eq(tenant_id))
            .select(invoices::document_number)
            .load::<String>(conn)?,
        DocumentKind::PurchaseOrder => purchase_orders::table
            .filter(purchase_orders::tenant_id.eq(tenant_id))
            .select(purchase_orders::document_number)
            .load::<String>(conn)?,
    };

    debug!(tenant = %tenant, kind = %kind, count = numbers.len(), "Listed document numbers");
    Ok(numbers)
}
}

backend_fn! {
/// Reads one document by id.
///
/// # Errors
///
/// Returns an error if the query fails or a stored column cannot be parsed.
/// Returns `Ok(None)` if the document does not exist for this tenant.
pub fn get_document(
    conn: &mut _,
    tenant: TenantId,
    kind: DocumentKind,
    id: DocumentId,
) -> Result<Option<DocumentRecord>, PersistenceError> {
    let tenant_id: i64 = tenant.value();
    match kind {
        DocumentKind::Estimate => found(
            estimates::table
                .filter(estimates::tenant_id.eq(tenant_id))
                .filter(estimates::estimate_id.eq(id.value()))
                .select(EstimateRow::as_select())
                .first::<EstimateRow>(conn),
        )?
        .map(EstimateRow::into_record)
        .transpose(),
        DocumentKind::Project => found(
            projects::table
                .filter(projects::tenant_id.eq(tenant_id))
                .filter(projects::project_id.eq(id.value()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(conn),
        )?
        .map(ProjectRow::into_record)
        .transpose(),
        DocumentKind::WorkOrder => found(
            work_orders::table
                .filter(work_orders::tenant_id.eq(tenant_id))
                .filter(work_orders::work_order_id.eq(id.value()))
                .select(WorkOrderRow::as_select())
                .first::<WorkOrderRow>(conn),
        )?
        .map(WorkOrderRow::into_record)
        .transpose(),
        DocumentKind::Invoice => found(
            invoices::table
                .filter(invoices::tenant_id.eq(tenant_id))
                .filter(invoices::invoice_id.eq(id.value()))
                .select(InvoiceRow::as_select())
                .first::<InvoiceRow>(conn),
        )?
        .map(InvoiceRow::into_record)
        .transpose(),
        DocumentKind::PurchaseOrder => found(
            purchase_orders::table
                .filter(purchase_orders::tenant_id.eq(tenant_id))
                .filter(purchase_orders::purchase_order_id.eq(id.value()))
                .select(PurchaseOrderRow::as_select())
                .first::<PurchaseOrderRow>(conn),
        )?
        .map(PurchaseOrderRow::into_record)
        .transpose(),
    }
}
}

backend_fn! {
/// Finds the document a conversion produced, by its idempotency key.
///
/// # Errors
///
/// Returns an error if the query fails or a stored column cannot be parsed.
pub fn find_by_conversion_key(
    conn: &mut _,
    tenant: TenantId,
    kind: DocumentKind,
    key: Uuid,
) -> Result<Option<DocumentRecord>, PersistenceError> {
    let tenant_id: i64 = tenant.value();
    let key: String = key.to_string();
    match kind {
        DocumentKind::Estimate => found(
            estimates::table
                .filter(estimates::tenant_id.eq(tenant_id))
                .filter(estimates::conversion_key.eq(&key))
                .select(EstimateRow::as_select())
                .first::<EstimateRow>(conn),
        )?
        .map(EstimateRow::into_record)
        .transpose(),
        DocumentKind::Project => found(
            projects::table
                .filter(projects::tenant_id.eq(tenant_id))
                .filter(projects::conversion_key.eq(&key))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(conn),
        )?
        .map(ProjectRow::into_record)
        .transpose(),
        DocumentKind::WorkOrder => found(
            work_orders::table
                .filter(work_orders::tenant_id.eq(tenant_id))
                .filter(work_orders::conversion_key.eq(&key))
                .select(WorkOrderRow::as_select())
                .first::<WorkOrderRow>(conn),
        )?
        .map(WorkOrderRow::into_record)
        .transpose(),
        DocumentKind::Invoice => found(
            invoices::table
                .filter(invoices::tenant_id.eq(tenant_id))
                .filter(invoices::conversion_key.eq(&key))
                .select(InvoiceRow::as_select())
                .first::<InvoiceRow>(conn),
        )?
        .map(InvoiceRow::into_record)
        .transpose(),
        DocumentKind::PurchaseOrder => found(
            purchase_orders::table
                .filter(purchase_orders::tenant_id.eq(tenant_id))
                .filter(purchase_orders::conversion_key.eq(&key))
                .select(PurchaseOrderRow::as_select())
                .first::<PurchaseOrderRow>(conn),
        )?
        .map(PurchaseOrderRow::into_record)
        .transpose(),
    }
}
}
