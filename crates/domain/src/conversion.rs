// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field mappings for the one-way document conversions.
//!
//! Each conversion reads a source document, produces the body of a new target
//! document and closes the source with its kind's `converted` status. The
//! functions here only build bodies; persisting them is the engine's job.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::{Estimate, Invoice, Project, WorkOrder};
use crate::error::DomainError;
use crate::kind::DocumentKind;
use crate::money::Totals;
use crate::status::{
    DocumentStatus, EstimateStatus, InvoiceStatus, Priority, ProjectStatus, WorkOrderStatus,
};
use crate::types::{DocumentId, TenantId};

/// Namespace for conversion idempotency keys.
const CONVERSION_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a4e_93b7_4d0a_8e55_1b2f_c0de_7a19);

/// The supported conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionKind {
    EstimateToProject,
    ProjectToWorkOrder,
    WorkOrderToInvoice,
}

impl ConversionKind {
    pub const ALL: [Self; 3] = [
        Self::EstimateToProject,
        Self::ProjectToWorkOrder,
        Self::WorkOrderToInvoice,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EstimateToProject => "estimate_to_project",
            Self::ProjectToWorkOrder => "project_to_work_order",
            Self::WorkOrderToInvoice => "work_order_to_invoice",
        }
    }

    #[must_use]
    pub const fn source_kind(&self) -> DocumentKind {
        match self {
            Self::EstimateToProject => DocumentKind::Estimate,
            Self::ProjectToWorkOrder => DocumentKind::Project,
            Self::WorkOrderToInvoice => DocumentKind::WorkOrder,
        }
    }

    #[must_use]
    pub const fn target_kind(&self) -> DocumentKind {
        match self {
            Self::EstimateToProject => DocumentKind::Project,
            Self::ProjectToWorkOrder => DocumentKind::WorkOrder,
            Self::WorkOrderToInvoice => DocumentKind::Invoice,
        }
    }

    /// The status the source is moved to once the target exists.
    #[must_use]
    pub const fn closing_status(&self) -> DocumentStatus {
        match self {
            Self::EstimateToProject => DocumentStatus::Estimate(EstimateStatus::Converted),
            Self::ProjectToWorkOrder => DocumentStatus::Project(ProjectStatus::Converted),
            Self::WorkOrderToInvoice => DocumentStatus::WorkOrder(WorkOrderStatus::Converted),
        }
    }

    /// Checks that a source in `status` may be converted.
    ///
    /// Closed sources (`converted`, `cancelled`) are refused. A work order
    /// must be `completed` before it can be invoiced.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StatusKindMismatch` if `status` is not a status of
    /// the source kind, or `DomainError::ConversionNotAllowed` if the status
    /// forbids the conversion.
    pub fn check_source_status(&self, status: DocumentStatus) -> Result<(), DomainError> {
        if status.kind() != self.source_kind() {
            return Err(DomainError::StatusKindMismatch {
                expected: self.source_kind(),
                actual: status.kind(),
            });
        }
        if status.is_terminal() {
            return Err(DomainError::ConversionNotAllowed {
                conversion: self.as_str(),
                status: status.as_str(),
                reason: "source document is closed",
            });
        }
        if matches!(self, Self::WorkOrderToInvoice)
            && status != DocumentStatus::WorkOrder(WorkOrderStatus::Completed)
        {
            return Err(DomainError::ConversionNotAllowed {
                conversion: self.as_str(),
                status: status.as_str(),
                reason: "work order must be completed before it is invoiced",
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derives the idempotency key of a conversion.
///
/// The key is a UUIDv5 of the tenant, conversion and source id, so a retried
/// conversion of the same source always produces the same key.
#[must_use]
pub fn conversion_key(tenant: TenantId, conversion: ConversionKind, source: DocumentId) -> Uuid {
    let name: String = format!("{tenant}:{conversion}:{source}");
    Uuid::new_v5(&CONVERSION_NAMESPACE, name.as_bytes())
}

/// Builds a project from an estimate.
///
/// The estimate's total becomes the project budget. The project starts in
/// `planning` with `medium` priority.
#[must_use]
pub fn project_from_estimate(estimate: &Estimate, estimate_id: DocumentId) -> Project {
    Project {
        project_name: estimate.title.clone(),
        description: estimate.description.clone(),
        customer_id: estimate.customer_id,
        customer_site_id: estimate.customer_site_id,
        estimate_id: Some(estimate_id),
        status: ProjectStatus::Planning,
        priority: Priority::Medium,
        total_budget: estimate.totals.total_amount,
        actual_end_date: None,
    }
}

/// Builds a work order from a project.
///
/// Urgent, high and low priorities carry over; anything else becomes medium.
#[must_use]
pub fn work_order_from_project(
    project: &Project,
    project_id: DocumentId,
    project_number: &str,
) -> WorkOrder {
    let priority: Priority = match project.priority {
        p @ (Priority::Urgent | Priority::High | Priority::Low) => p,
        Priority::Medium => Priority::Medium,
    };

    WorkOrder {
        title: project.project_name.clone(),
        description: project.description.clone(),
        customer_id: project.customer_id,
        customer_site_id: project.customer_site_id,
        project_id: Some(project_id),
        status: WorkOrderStatus::Open,
        priority,
        notes: Some(format!("Created from project {project_number}")),
        completed_date: None,
    }
}

/// Caller-supplied amounts for invoicing a work order.
///
/// Missing totals count as zero; a missing tax rate means no tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvoiceAmounts {
    pub labor_total: Option<Decimal>,
    pub materials_total: Option<Decimal>,
    pub tax_rate: Option<Decimal>,
}

/// Builds a draft invoice for a completed work order.
///
/// # Errors
///
/// * `DomainError::NegativeAmount` if any supplied amount is negative
/// * `DomainError::InvalidAmount` if the amounts overflow a `Decimal`
pub fn invoice_from_work_order(
    work_order: &WorkOrder,
    work_order_id: DocumentId,
    amounts: &InvoiceAmounts,
) -> Result<Invoice, DomainError> {
    let labor: Decimal = non_negative("labor_total", amounts.labor_total)?;
    let materials: Decimal = non_negative("materials_total", amounts.materials_total)?;
    let subtotal: Decimal = labor
        .checked_add(materials)
        .ok_or_else(|| DomainError::InvalidAmount {
            field: "subtotal",
            value: format!("{labor} + {materials}"),
        })?;
    let totals: Totals = Totals::compute(subtotal, amounts.tax_rate.unwrap_or(Decimal::ZERO))?;

    Ok(Invoice {
        customer_id: work_order.customer_id,
        customer_site_id: work_order.customer_site_id,
        description: work_order
            .description
            .clone()
            .or_else(|| Some(work_order.title.clone())),
        work_order_id: Some(work_order_id),
        status: InvoiceStatus::Draft,
        totals,
    })
}

fn non_negative(field: &'static str, value: Option<Decimal>) -> Result<Decimal, DomainError> {
    let value: Decimal = value.unwrap_or(Decimal::ZERO);
    if value < Decimal::ZERO {
        return Err(DomainError::NegativeAmount {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}
