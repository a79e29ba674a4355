// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Document inserts and lifecycle updates.
//!
//! The unique constraint on `(tenant_id, document_number)` is what finally
//! settles two callers that allocated the same number; the loser's insert
//! fails with `PersistenceError::UniqueViolation`.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;
use tradeflow_domain::{DocumentBody, DocumentId, NewDocument, TenantId};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{estimates, invoices, projects, purchase_orders, work_orders};
use crate::error::PersistenceError;
use crate::rows::{format_date, format_timestamp};

backend_fn! {
/// Inserts a document and returns its new id.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the number (or conversion
/// key) is already used within the tenant, and other errors if the insert
/// fails.
pub fn insert_document(
    conn: &mut _,
    document: &NewDocument,
    created_at: &str,
) -> Result<DocumentId, PersistenceError> {
    let tenant_id: i64 = document.tenant_id.value();
    let number: &str = &document.number;
    let key: Option<String> = document.conversion_key.map(|k| k.to_string());
    let key: Option<&str> = key.as_deref();

    match &document.body {
        DocumentBody::Estimate(e) => {
            diesel::insert_into(estimates::table)
                .values((
                    estimates::tenant_id.eq(tenant_id),
                    estimates::document_number.eq(number),
                    estimates::conversion_key.eq(key),
                    estimates::title.eq(&e.title),
                    estimates::description.eq(e.description.as_deref()),
                    estimates::customer_id.eq(e.customer_id),
                    estimates::customer_site_id.eq(e.customer_site_id),
                    estimates::status.eq(e.status.as_str()),
                    estimates::subtotal.eq(e.totals.subtotal.to_string()),
                    estimates::tax_rate.eq(e.totals.tax_rate.to_string()),
                    estimates::tax_amount.eq(e.totals.tax_amount.to_string()),
                    estimates::total_amount.eq(e.totals.total_amount.to_string()),
                    estimates::created_at.eq(created_at),
                ))
                .execute(conn)?;
        }
        DocumentBody::Project(p) => {
            let actual_end_date: Option<String> =
                p.actual_end_date.map(format_date).transpose()?;
            diesel::insert_into(projects::table)
                .values((
                    projects::tenant_id.eq(tenant_id),
                    projects::document_number.eq(number),
                    projects::conversion_key.eq(key),
                    projects::project_name.eq(&p.project_name),
                    projects::description.eq(p.description.as_deref()),
                    projects::customer_id.eq(p.customer_id),
                    projects::customer_site_id.eq(p.customer_site_id),
                    projects::estimate_id.eq(p.estimate_id.map(|id| id.value())),
                    projects::status.eq(p.status.as_str()),
                    projects::priority.eq(p.priority.as_str()),
                    projects::total_budget.eq(p.total_budget.to_string()),
                    projects::actual_end_date.eq(actual_end_date),
                    projects::created_at.eq(created_at),
                ))
                .execute(conn)?;
        }
        DocumentBody::WorkOrder(w) => {
            let completed_date: Option<String> =
                w.completed_date.map(format_timestamp).transpose()?;
            diesel::insert_into(work_orders::table)
                .values((
                    work_orders::tenant_id.eq(tenant_id),
                    work_orders::document_number.eq(number),
                    work_orders::conversion_key.eq(key),
                    work_orders::title.eq(&w.title),
                    work_orders::description.eq(w.description.as_deref()),
                    work_orders::customer_id.eq(w.customer_id),
                    work_orders::customer_site_id.eq(w.customer_site_id),
                    work_orders::project_id.eq(w.project_id.map(|id| id.value())),
                    work_orders::status.eq(w.status.as_str()),
                    work_orders::priority.eq(w.priority.as_str()),
                    work_orders::notes.eq(w.notes.as_deref()),
                    work_orders::completed_date.eq(completed_date),
                    work_orders::created_at.eq(created_at),
                ))
                .execute(conn)?;
        }
        DocumentBody::Invoice(i) => {
            diesel::insert_into(invoices::table)
                .values((
                    invoices::tenant_id.eq(tenant_id),
                    invoices::document_number.eq(number),
                    invoices::conversion_key.eq(key),
                    invoices::customer_id.eq(i.customer_id),
                    invoices::customer_site_id.eq(i.customer_site_id),
                    invoices::description.eq(i.description.as_deref()),
                    invoices::work_order_id.eq(i.work_order_id.map(|id| id.value())),
                    invoices::status.eq(i.status.as_str()),
                    invoices::subtotal.eq(i.totals.subtotal.to_string()),
                    invoices::tax_rate.eq(i.totals.tax_rate.to_string()),
                    invoices::tax_amount.eq(i.totals.tax_amount.to_string()),
                    invoices::total_amount.eq(i.totals.total_amount.to_string()),
                    invoices::created_at.eq(created_at),
                ))
                .execute(conn)?;
        }
        DocumentBody::PurchaseOrder(po) => {
            diesel::insert_into(purchase_orders::table)
                .values((
                    purchase_orders::tenant_id.eq(tenant_id),
                    purchase_orders::document_number.eq(number),
                    purchase_orders::conversion_key.eq(key),
                    purchase_orders::vendor_name.eq(&po.vendor_name),
                    purchase_orders::description.eq(po.description.as_deref()),
                    purchase_orders::project_id.eq(po.project_id.map(|id| id.value())),
                    purchase_orders::work_order_id.eq(po.work_order_id.map(|id| id.value())),
                    purchase_orders::status.eq(po.status.as_str()),
                    purchase_orders::subtotal.eq(po.totals.subtotal.to_string()),
                    purchase_orders::tax_rate.eq(po.totals.tax_rate.to_string()),
                    purchase_orders::tax_amount.eq(po.totals.tax_amount.to_string()),
                    purchase_orders::total_amount.eq(po.totals.total_amount.to_string()),
                    purchase_orders::created_at.eq(created_at),
                ))
                .execute(conn)?;
        }
    }

    let id: i64 = conn.get_last_insert_rowid()?;
    debug!(tenant_id, kind = %document.body.kind(), id, number, "Inserted document");
    Ok(DocumentId::new(id))
}
}

backend_fn! {
/// Writes the status and completion stamps held in `body` to the document's
/// row.
///
/// Returns the number of rows updated, which is zero when the document does
/// not belong to `tenant`.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn write_lifecycle_fields(
    conn: &mut _,
    tenant: TenantId,
    id: DocumentId,
    body: &DocumentBody,
) -> Result<usize, PersistenceError> {
    let tenant_id: i64 = tenant.value();
    let updated: usize = match body {
        DocumentBody::Estimate(e) => diesel::update(estimates::table)
            .filter(estimates::tenant_id.eq(tenant_id))
            .filter(estimates::estimate_id.eq(id.value()))
            .set(estimates::status.eq(e.status.as_str()))
            .execute(conn)?,
        DocumentBody::Project(p) => {
            let actual_end_date: Option<String> =
                p.actual_end_date.map(format_date).transpose()?;
            diesel::update(projects::table)
                .filter(projects::tenant_id.eq(tenant_id))
                .filter(projects::project_id.eq(id.value()))
                .set((
                    projects::status.eq(p.status.as_str()),
                    projects::actual_end_date.eq(actual_end_date),
                ))
                .execute(conn)?
        }
        DocumentBody::WorkOrder(w) => {
            let completed_date: Option<String> =
                w.completed_date.map(format_timestamp).transpose()?;
            diesel::update(work_orders::table)
                .filter(work_orders::tenant_id.eq(tenant_id))
                .filter(work_orders::work_order_id.eq(id.value()))
                .set((
                    work_orders::status.eq(w.status.as_str()),
                    work_orders::completed_date.eq(completed_date),
                ))
                .execute(conn)?
        }
        DocumentBody::Invoice(i) => diesel::update(invoices::table)
            .filter(invoices::tenant_id.eq(tenant_id))
            .filter(invoices::invoice_id.eq(id.value()))
            .set(invoices::status.eq(i.status.as_str()))
            .execute(conn)?,
        DocumentBody::PurchaseOrder(po) => diesel::update(purchase_orders::table)
            .filter(purchase_orders::tenant_id.eq(tenant_id))
            .filter(purchase_orders::purchase_order_id.eq(id.value()))
            .set(purchase_orders::status.eq(po.status.as_str()))
            .execute(conn)?,
    };

    debug!(tenant_id, kind = %body.kind(), id = %id, updated, "Wrote lifecycle fields");
    Ok(updated)
}
}
