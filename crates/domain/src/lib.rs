// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and pure rules for document numbering and conversion.
//!
//! Nothing in this crate performs I/O. Store access, tenant resolution and
//! logging live in the `tradeflow` core crate.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod conversion;
mod document;
mod error;
mod format;
mod kind;
mod money;
mod numbering;
mod sequence;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use conversion::{
    ConversionKind, InvoiceAmounts, conversion_key, invoice_from_work_order,
    project_from_estimate, work_order_from_project,
};
pub use document::{
    DocumentBody, DocumentPatch, DocumentRecord, Estimate, Invoice, NewDocument, Project,
    PurchaseOrder, WorkOrder,
};
pub use error::DomainError;
pub use format::render_number;
pub use kind::DocumentKind;
pub use money::Totals;
pub use numbering::{
    KindNumbering, StoredKindNumbering, StoredNumberingConfig, TenantNumberingConfig,
    validate_number_format,
};
pub use sequence::parse_trailing_sequence;
pub use status::{
    DocumentStatus, EstimateStatus, InvoiceStatus, Priority, ProjectStatus, PurchaseOrderStatus,
    WorkOrderStatus,
};
pub use types::{DocumentId, TenantId};
