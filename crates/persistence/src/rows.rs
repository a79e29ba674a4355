// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs for the document tables and their conversion to domain types.
//!
//! Money is stored as decimal text, `created_at` and `completed_date` as
//! RFC 3339 text and `actual_end_date` as `YYYY-MM-DD`. A value that fails to
//! parse surfaces as `PersistenceError::InvalidStoredValue` naming the column.

use std::str::FromStr;

use diesel::prelude::*;
use rust_decimal::Decimal;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tradeflow_domain::{
    DocumentBody, DocumentId, DocumentRecord, Estimate, Invoice, Priority, Project, PurchaseOrder,
    StoredKindNumbering, TenantId, Totals, WorkOrder,
};
use uuid::Uuid;

use crate::diesel_schema::{
    estimates, invoices, numbering_configs, profiles, projects, purchase_orders, work_orders,
};
use crate::error::PersistenceError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

fn invalid(table: &'static str, column: &'static str, value: &str) -> PersistenceError {
    PersistenceError::InvalidStoredValue {
        table,
        column,
        value: value.to_string(),
    }
}

fn parse_text<T: FromStr>(
    table: &'static str,
    column: &'static str,
    raw: &str,
) -> Result<T, PersistenceError> {
    raw.parse().map_err(|_| invalid(table, column, raw))
}

fn parse_decimal(
    table: &'static str,
    column: &'static str,
    raw: &str,
) -> Result<Decimal, PersistenceError> {
    Decimal::from_str(raw).map_err(|_| invalid(table, column, raw))
}

fn parse_timestamp(
    table: &'static str,
    column: &'static str,
    raw: &str,
) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(raw, &Rfc3339).map_err(|_| invalid(table, column, raw))
}

fn parse_key(table: &'static str, raw: Option<&str>) -> Result<Option<Uuid>, PersistenceError> {
    raw.map(|k| Uuid::parse_str(k).map_err(|_| invalid(table, "conversion_key", k)))
        .transpose()
}

fn parse_totals(
    table: &'static str,
    subtotal: &str,
    tax_rate: &str,
    tax_amount: &str,
    total_amount: &str,
) -> Result<Totals, PersistenceError> {
    Ok(Totals {
        subtotal: parse_decimal(table, "subtotal", subtotal)?,
        tax_rate: parse_decimal(table, "tax_rate", tax_rate)?,
        tax_amount: parse_decimal(table, "tax_amount", tax_amount)?,
        total_amount: parse_decimal(table, "total_amount", total_amount)?,
    })
}

/// Formats a timestamp for a text column.
///
/// # Errors
///
/// Returns an error if the timestamp has no RFC 3339 representation.
pub fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::QueryFailed(format!("Failed to format timestamp: {e}")))
}

/// Formats a calendar date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn format_date(value: Date) -> Result<String, PersistenceError> {
    value
        .format(DATE_FORMAT)
        .map_err(|e| PersistenceError::QueryFailed(format!("Failed to format date: {e}")))
}

/// Columns every document table shares.
struct Header<'a> {
    table: &'static str,
    id: i64,
    tenant_id: i64,
    number: String,
    conversion_key: Option<&'a str>,
    created_at: &'a str,
}

impl Header<'_> {
    fn into_record(self, body: DocumentBody) -> Result<DocumentRecord, PersistenceError> {
        Ok(DocumentRecord {
            id: DocumentId::new(self.id),
            tenant_id: TenantId::new(self.tenant_id),
            number: self.number,
            conversion_key: parse_key(self.table, self.conversion_key)?,
            created_at: parse_timestamp(self.table, "created_at", self.created_at)?,
            body,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = profiles)]
pub struct ProfileRow {
    pub user_id: String,
    pub tenant_id: Option<i64>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = numbering_configs)]
pub struct NumberingConfigRow {
    pub document_kind: String,
    pub prefix: Option<String>,
    pub number_format: Option<String>,
    pub next_counter: Option<i64>,
}

impl NumberingConfigRow {
    /// Converts the row into the stored settings for its kind.
    ///
    /// A negative counter is treated as corrupt.
    pub fn to_stored(&self) -> Result<StoredKindNumbering, PersistenceError> {
        let next_counter: Option<u64> = self
            .next_counter
            .map(|c| {
                u64::try_from(c)
                    .map_err(|_| invalid("numbering_configs", "next_counter", &c.to_string()))
            })
            .transpose()?;
        Ok(StoredKindNumbering {
            prefix: self.prefix.clone(),
            format: self.number_format.clone(),
            next_counter,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = estimates)]
pub struct EstimateRow {
    estimate_id: i64,
    tenant_id: i64,
    document_number: String,
    conversion_key: Option<String>,
    title: String,
    description: Option<String>,
    customer_id: i64,
    customer_site_id: Option<i64>,
    status: String,
    subtotal: String,
    tax_rate: String,
    tax_amount: String,
    total_amount: String,
    created_at: String,
}

impl EstimateRow {
    pub fn into_record(self) -> Result<DocumentRecord, PersistenceError> {
        const TABLE: &str = "estimates";
        let body: DocumentBody = DocumentBody::Estimate(Estimate {
            title: self.title,
            description: self.description,
            customer_id: self.customer_id,
            customer_site_id: self.customer_site_id,
            status: parse_text(TABLE, "status", &self.status)?,
            totals: parse_totals(
                TABLE,
                &self.subtotal,
                &self.tax_rate,
                &self.tax_amount,
                &self.total_amount,
            )?,
        });
        Header {
            table: TABLE,
            id: self.estimate_id,
            tenant_id: self.tenant_id,
            number: self.document_number,
            conversion_key: self.conversion_key.as_deref(),
            created_at: &self.created_at,
        }
        .into_record(body)
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = projects)]
pub struct ProjectRow {
    project_id: i64,
    tenant_id: i64,
    document_number: String,
    conversion_key: Option<String>,
    project_name: String,
    description: Option<String>,
    customer_id: i64,
    customer_site_id: Option<i64>,
    estimate_id: Option<i64>,
    status: String,
    priority: String,
    total_budget: String,
    actual_end_date: Option<String>,
    created_at: String,
}

impl ProjectRow {
    pub fn into_record(self) -> Result<DocumentRecord, PersistenceError> {
        const TABLE: &str = "projects";
        let actual_end_date: Option<Date> = self
            .actual_end_date
            .as_deref()
            .map(|d| Date::parse(d, DATE_FORMAT).map_err(|_| invalid(TABLE, "actual_end_date", d)))
            .transpose()?;
        let body: DocumentBody = DocumentBody::Project(Project {
            project_name: self.project_name,
            description: self.description,
            customer_id: self.customer_id,
            customer_site_id: self.customer_site_id,
            estimate_id: self.estimate_id.map(DocumentId::new),
            status: parse_text(TABLE, "status", &self.status)?,
            priority: Priority::parse_lenient(&self.priority),
            total_budget: parse_decimal(TABLE, "total_budget", &self.total_budget)?,
            actual_end_date,
        });
        Header {
            table: TABLE,
            id: self.project_id,
            tenant_id: self.tenant_id,
            number: self.document_number,
            conversion_key: self.conversion_key.as_deref(),
            created_at: &self.created_at,
        }
        .into_record(body)
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = work_orders)]
pub struct WorkOrderRow {
    work_order_id: i64,
    tenant_id: i64,
    document_number: String,
    conversion_key: Option<String>,
    title: String,
    description: Option<String>,
    customer_id: i64,
    customer_site_id: Option<i64>,
    project_id: Option<i64>,
    status: String,
    priority: String,
    notes: Option<String>,
    completed_date: Option<String>,
    created_at: String,
}

impl WorkOrderRow {
    pub fn into_record(self) -> Result<DocumentRecord, PersistenceError> {
        const TABLE: &str = "work_orders";
        let completed_date: Option<OffsetDateTime> = self
            .completed_date
            .as_deref()
            .map(|d| parse_timestamp(TABLE, "completed_date", d))
            .transpose()?;
        let body: DocumentBody = DocumentBody::WorkOrder(WorkOrder {
            title: self.title,
            description: self.description,
            customer_id: self.customer_id,
            customer_site_id: self.customer_site_id,
            project_id: self.project_id.map(DocumentId::new),
            status: parse_text(TABLE, "status", &self.status)?,
            priority: Priority::parse_lenient(&self.priority),
            notes: self.notes,
            completed_date,
        });
        Header {
            table: TABLE,
            id: self.work_order_id,
            tenant_id: self.tenant_id,
            number: self.document_number,
            conversion_key: self.conversion_key.as_deref(),
            created_at: &self.created_at,
        }
        .into_record(body)
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = invoices)]
pub struct InvoiceRow {
    invoice_id: i64,
    tenant_id: i64,
    document_number: String,
    conversion_key: Option<String>,
    customer_id: i64,
    customer_site_id: Option<i64>,
    description: Option<String>,
    work_order_id: Option<i64>,
    status: String,
    subtotal: String,
    tax_rate: String,
    tax_amount: String,
    total_amount: String,
    created_at: String,
}

impl InvoiceRow {
    pub fn into_record(self) -> Result<DocumentRecord, PersistenceError> {
        const TABLE: &str = "invoices";
        let body: DocumentBody = DocumentBody::Invoice(Invoice {
            customer_id: self.customer_id,
            customer_site_id: self.customer_site_id,
            description: self.description,
            work_order_id: self.work_order_id.map(DocumentId::new),
            status: parse_text(TABLE, "status", &self.status)?,
            totals: parse_totals(
                TABLE,
                &self.subtotal,
                &self.tax_rate,
                &self.tax_amount,
                &self.total_amount,
            )?,
        });
        Header {
            table: TABLE,
            id: self.invoice_id,
            tenant_id: self.tenant_id,
            number: self.document_number,
            conversion_key: self.conversion_key.as_deref(),
            created_at: &self.created_at,
        }
        .into_record(body)
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = purchase_orders)]
pub struct PurchaseOrderRow {
    purchase_order_id: i64,
    tenant_id: i64,
    document_number: String,
    conversion_key: Option<String>,
    vendor_name: String,
    description: Option<String>,
    project_id: Option<i64>,
    work_order_id: Option<i64>,
    status: String,
    subtotal: String,
    tax_rate: String,
    tax_amount: String,
    total_amount: String,
    created_at: String,
}

impl PurchaseOrderRow {
    pub fn into_record(self) -> Result<DocumentRecord, PersistenceError> {
        const TABLE: &str = "purchase_orders";
        let body: DocumentBody = DocumentBody::PurchaseOrder(PurchaseOrder {
            vendor_name: self.vendor_name,
            description: self.description,
            project_id: self.project_id.map(DocumentId::new),
            work_order_id: self.work_order_id.map(DocumentId::new),
            status: parse_text(TABLE, "status", &self.status)?,
            totals: parse_totals(
                TABLE,
                &self.subtotal,
                &self.tax_rate,
                &self.tax_amount,
                &self.total_amount,
            )?,
        });
        Header {
            table: TABLE,
            id: self.purchase_order_id,
            tenant_id: self.tenant_id,
            number: self.document_number,
            conversion_key: self.conversion_key.as_deref(),
            created_at: &self.created_at,
        }
        .into_record(body)
    }
}
