// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The conversion pipeline.
//!
//! A conversion runs three store calls in order: read the source, create the
//! target, close the source. There is no transaction around them. The target
//! carries a key derived from the tenant, conversion and source id, and a
//! retry that finds a target with that key reuses it and only repeats the
//! close step.

use time::OffsetDateTime;
use tracing::{debug, info};
use tradeflow_domain::{
    ConversionKind, DocumentBody, DocumentId, DocumentPatch, DocumentRecord, DomainError,
    Estimate, InvoiceAmounts, NewDocument, Project, TenantId, WorkOrder, conversion_key,
    invoice_from_work_order, project_from_estimate, work_order_from_project,
};
use uuid::Uuid;

use crate::allocator::{Allocation, allocate, confirm_allocation_best_effort};
use crate::error::CoreError;
use crate::store::DocumentStore;

/// The result of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// The source after it was closed.
    pub source: DocumentRecord,
    /// The document produced by the conversion.
    pub target: DocumentRecord,
    /// True when the target already existed from an earlier attempt.
    pub resumed: bool,
}

/// Converts an estimate into a project.
///
/// # Errors
///
/// * `CoreError::SourceNotFound` if the estimate does not exist
/// * `CoreError::DomainViolation` if the estimate is already closed
/// * `CoreError::Store` if any store call fails
pub fn convert_estimate_to_project<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    estimate_id: DocumentId,
    now: OffsetDateTime,
) -> Result<ConversionOutcome, CoreError> {
    run_conversion(
        store,
        tenant,
        ConversionKind::EstimateToProject,
        estimate_id,
        now,
        |source: &DocumentRecord| {
            let estimate: &Estimate = match &source.body {
                DocumentBody::Estimate(estimate) => estimate,
                other => return Err(body_mismatch(ConversionKind::EstimateToProject, other)),
            };
            Ok(DocumentBody::Project(project_from_estimate(
                estimate, source.id,
            )))
        },
    )
}

/// Converts a project into a work order.
///
/// # Errors
///
/// * `CoreError::SourceNotFound` if the project does not exist
/// * `CoreError::DomainViolation` if the project is already closed
/// * `CoreError::Store` if any store call fails
pub fn convert_project_to_work_order<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    project_id: DocumentId,
    now: OffsetDateTime,
) -> Result<ConversionOutcome, CoreError> {
    run_conversion(
        store,
        tenant,
        ConversionKind::ProjectToWorkOrder,
        project_id,
        now,
        |source: &DocumentRecord| {
            let project: &Project = match &source.body {
                DocumentBody::Project(project) => project,
                other => return Err(body_mismatch(ConversionKind::ProjectToWorkOrder, other)),
            };
            Ok(DocumentBody::WorkOrder(work_order_from_project(
                project,
                source.id,
                &source.number,
            )))
        },
    )
}

/// Converts a completed work order into an invoice.
///
/// # Errors
///
/// * `CoreError::SourceNotFound` if the work order does not exist
/// * `CoreError::DomainViolation` if the work order is not completed or an
///   amount is negative
/// * `CoreError::Store` if any store call fails
pub fn convert_work_order_to_invoice<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    work_order_id: DocumentId,
    amounts: &InvoiceAmounts,
    now: OffsetDateTime,
) -> Result<ConversionOutcome, CoreError> {
    run_conversion(
        store,
        tenant,
        ConversionKind::WorkOrderToInvoice,
        work_order_id,
        now,
        |source: &DocumentRecord| {
            let work_order: &WorkOrder = match &source.body {
                DocumentBody::WorkOrder(work_order) => work_order,
                other => return Err(body_mismatch(ConversionKind::WorkOrderToInvoice, other)),
            };
            Ok(DocumentBody::Invoice(invoice_from_work_order(
                work_order, source.id, amounts,
            )?))
        },
    )
}

fn body_mismatch(conversion: ConversionKind, body: &DocumentBody) -> CoreError {
    CoreError::DomainViolation(DomainError::StatusKindMismatch {
        expected: conversion.source_kind(),
        actual: body.kind(),
    })
}

fn run_conversion<S, F>(
    store: &mut S,
    tenant: TenantId,
    conversion: ConversionKind,
    source_id: DocumentId,
    now: OffsetDateTime,
    build_target: F,
) -> Result<ConversionOutcome, CoreError>
where
    S: DocumentStore,
    F: FnOnce(&DocumentRecord) -> Result<DocumentBody, CoreError>,
{
    let source_kind = conversion.source_kind();
    let source: DocumentRecord = store
        .get_document(tenant, source_kind, source_id)?
        .ok_or(CoreError::SourceNotFound {
            kind: source_kind,
            id: source_id,
        })?;

    let key: Uuid = conversion_key(tenant, conversion, source_id);
    let existing: Option<DocumentRecord> =
        store.find_by_conversion_key(tenant, conversion.target_kind(), key)?;

    let (target, resumed): (DocumentRecord, bool) = match existing {
        Some(target) => {
            debug!(
                tenant = %tenant,
                conversion = %conversion,
                source = %source_id,
                target = %target.id,
                "Resuming conversion with existing target"
            );
            (target, true)
        }
        None => {
            conversion.check_source_status(source.status())?;
            let body: DocumentBody = build_target(&source)?;
            let target: DocumentRecord =
                create_target(store, tenant, conversion, key, body, now)?;
            (target, false)
        }
    };

    let source: DocumentRecord = close_source(store, tenant, conversion, source, now)?;

    info!(
        tenant = %tenant,
        conversion = %conversion,
        source = %source.id,
        target = %target.id,
        target_number = %target.number,
        resumed,
        "Converted document"
    );

    Ok(ConversionOutcome {
        source,
        target,
        resumed,
    })
}

fn create_target<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    conversion: ConversionKind,
    key: Uuid,
    body: DocumentBody,
    now: OffsetDateTime,
) -> Result<DocumentRecord, CoreError> {
    let allocation: Allocation = allocate(store, tenant, conversion.target_kind(), now.date())?;

    let target: DocumentRecord = store.create_document(&NewDocument {
        tenant_id: tenant,
        number: allocation.number.clone(),
        conversion_key: Some(key),
        body,
    })?;

    confirm_allocation_best_effort(store, tenant, &allocation);
    Ok(target)
}

fn close_source<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    conversion: ConversionKind,
    source: DocumentRecord,
    now: OffsetDateTime,
) -> Result<DocumentRecord, CoreError> {
    let closing = conversion.closing_status();
    if source.status() == closing {
        return Ok(source);
    }

    let patch: DocumentPatch = DocumentPatch::for_status(closing, now);
    store
        .update_document(tenant, source.kind(), source.id, &patch)?
        .ok_or(CoreError::SourceNotFound {
            kind: source.kind(),
            id: source.id,
        })
}
