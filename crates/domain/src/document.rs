// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Document records and their kind-specific bodies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::error::DomainError;
use crate::kind::DocumentKind;
use crate::money::Totals;
use crate::status::{
    DocumentStatus, EstimateStatus, InvoiceStatus, Priority, ProjectStatus, PurchaseOrderStatus,
    WorkOrderStatus,
};
use crate::types::{DocumentId, TenantId};

/// A priced proposal sent to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub title: String,
    pub description: Option<String>,
    pub customer_id: i64,
    pub customer_site_id: Option<i64>,
    pub status: EstimateStatus,
    pub totals: Totals,
}

/// A body of work with a budget, usually produced from an accepted estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub project_name: String,
    pub description: Option<String>,
    pub customer_id: i64,
    pub customer_site_id: Option<i64>,
    /// The estimate this project was converted from.
    pub estimate_id: Option<DocumentId>,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub total_budget: Decimal,
    /// Stamped when the project is marked completed.
    pub actual_end_date: Option<Date>,
}

/// A unit of field work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub title: String,
    pub description: Option<String>,
    pub customer_id: i64,
    pub customer_site_id: Option<i64>,
    /// The project this work order was converted from.
    pub project_id: Option<DocumentId>,
    pub status: WorkOrderStatus,
    pub priority: Priority,
    pub notes: Option<String>,
    /// Stamped when the work order is marked completed.
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_date: Option<OffsetDateTime>,
}

/// A bill for completed work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer_id: i64,
    pub customer_site_id: Option<i64>,
    pub description: Option<String>,
    /// The work order this invoice was converted from.
    pub work_order_id: Option<DocumentId>,
    pub status: InvoiceStatus,
    pub totals: Totals,
}

/// An order placed with a vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub vendor_name: String,
    pub description: Option<String>,
    pub project_id: Option<DocumentId>,
    pub work_order_id: Option<DocumentId>,
    pub status: PurchaseOrderStatus,
    pub totals: Totals,
}

/// The kind-specific part of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentBody {
    Estimate(Estimate),
    Project(Project),
    WorkOrder(WorkOrder),
    Invoice(Invoice),
    PurchaseOrder(PurchaseOrder),
}

impl DocumentBody {
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        match self {
            Self::Estimate(_) => DocumentKind::Estimate,
            Self::Project(_) => DocumentKind::Project,
            Self::WorkOrder(_) => DocumentKind::WorkOrder,
            Self::Invoice(_) => DocumentKind::Invoice,
            Self::PurchaseOrder(_) => DocumentKind::PurchaseOrder,
        }
    }

    #[must_use]
    pub const fn status(&self) -> DocumentStatus {
        match self {
            Self::Estimate(d) => DocumentStatus::Estimate(d.status),
            Self::Project(d) => DocumentStatus::Project(d.status),
            Self::WorkOrder(d) => DocumentStatus::WorkOrder(d.status),
            Self::Invoice(d) => DocumentStatus::Invoice(d.status),
            Self::PurchaseOrder(d) => DocumentStatus::PurchaseOrder(d.status),
        }
    }

    /// Readies a body for creation.
    ///
    /// The status is reset to the kind's initial status, and documents that
    /// carry totals have their tax and total recomputed from the subtotal and
    /// tax rate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativeAmount` if the subtotal or tax rate is
    /// negative.
    pub fn prepare_new(mut self) -> Result<Self, DomainError> {
        match &mut self {
            Self::Estimate(d) => {
                d.status = EstimateStatus::default();
                d.totals = Totals::compute(d.totals.subtotal, d.totals.tax_rate)?;
            }
            Self::Project(d) => {
                d.status = ProjectStatus::default();
                d.actual_end_date = None;
                if d.total_budget < Decimal::ZERO {
                    return Err(DomainError::NegativeAmount {
                        field: "total_budget",
                        value: d.total_budget.to_string(),
                    });
                }
            }
            Self::WorkOrder(d) => {
                d.status = WorkOrderStatus::default();
                d.completed_date = None;
            }
            Self::Invoice(d) => {
                d.status = InvoiceStatus::default();
                d.totals = Totals::compute(d.totals.subtotal, d.totals.tax_rate)?;
            }
            Self::PurchaseOrder(d) => {
                d.status = PurchaseOrderStatus::default();
                d.totals = Totals::compute(d.totals.subtotal, d.totals.tax_rate)?;
            }
        }
        Ok(self)
    }

    /// Applies a patch in place.
    ///
    /// Timestamp fields that the patch leaves unset are not touched.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StatusKindMismatch` if the patch carries a status
    /// of another kind.
    pub fn apply(&mut self, patch: &DocumentPatch) -> Result<(), DomainError> {
        if let Some(status) = patch.status {
            match (&mut *self, status) {
                (Self::Estimate(d), DocumentStatus::Estimate(s)) => d.status = s,
                (Self::Project(d), DocumentStatus::Project(s)) => d.status = s,
                (Self::WorkOrder(d), DocumentStatus::WorkOrder(s)) => d.status = s,
                (Self::Invoice(d), DocumentStatus::Invoice(s)) => d.status = s,
                (Self::PurchaseOrder(d), DocumentStatus::PurchaseOrder(s)) => d.status = s,
                (body, status) => {
                    return Err(DomainError::StatusKindMismatch {
                        expected: body.kind(),
                        actual: status.kind(),
                    });
                }
            }
        }
        if let (Self::WorkOrder(d), Some(completed)) = (&mut *self, patch.completed_date) {
            d.completed_date = Some(completed);
        }
        if let (Self::Project(d), Some(end)) = (&mut *self, patch.actual_end_date) {
            d.actual_end_date = Some(end);
        }
        Ok(())
    }
}

/// A persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub tenant_id: TenantId,
    /// The formatted number, unique within the tenant for this kind.
    pub number: String,
    /// Idempotency key of the conversion that produced this document.
    pub conversion_key: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub body: DocumentBody,
}

impl DocumentRecord {
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        self.body.kind()
    }

    #[must_use]
    pub const fn status(&self) -> DocumentStatus {
        self.body.status()
    }
}

/// A document about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub tenant_id: TenantId,
    pub number: String,
    pub conversion_key: Option<Uuid>,
    pub body: DocumentBody,
}

/// A partial update to a persisted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentPatch {
    pub status: Option<DocumentStatus>,
    pub completed_date: Option<OffsetDateTime>,
    pub actual_end_date: Option<Date>,
}

impl DocumentPatch {
    /// Builds the patch for moving a document to `status` at `now`.
    ///
    /// Completing a work order stamps `completed_date` with `now`; completing
    /// a project stamps `actual_end_date` with today's date. Every other
    /// status writes only the status field.
    #[must_use]
    pub fn for_status(status: DocumentStatus, now: OffsetDateTime) -> Self {
        let mut patch: Self = Self {
            status: Some(status),
            ..Self::default()
        };
        match status {
            DocumentStatus::WorkOrder(WorkOrderStatus::Completed) => {
                patch.completed_date = Some(now);
            }
            DocumentStatus::Project(ProjectStatus::Completed) => {
                patch.actual_end_date = Some(now.date());
            }
            _ => {}
        }
        patch
    }
}
