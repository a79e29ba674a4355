// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use tracing::{info, warn};
use tradeflow_domain::{
    DocumentBody, DocumentId, DocumentKind, DocumentPatch, DocumentRecord, DocumentStatus,
    DomainError, NewDocument, TenantId, parse_trailing_sequence,
};

use crate::allocator::{Allocation, allocate, confirm_allocation_best_effort};
use crate::error::CoreError;
use crate::store::DocumentStore;

/// Creates a document in its kind's initial status.
///
/// When `number` is given it is a number allocated earlier in the create
/// flow and is used as is; otherwise a number is allocated now. After the
/// create succeeds the stored counter is advanced, and a failure to advance it
/// is only logged.
///
/// # Errors
///
/// * `CoreError::DomainViolation` if the body carries negative amounts, or
///   if the supplied number ends in a sequence too large to advance
/// * `CoreError::Store` if allocation or the create fails, including a
///   duplicate number
pub fn create_document<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    body: DocumentBody,
    number: Option<String>,
    now: OffsetDateTime,
) -> Result<DocumentRecord, CoreError> {
    let body: DocumentBody = body.prepare_new()?;
    let kind: DocumentKind = body.kind();

    let (number, allocation): (String, Option<Allocation>) = match number {
        None => {
            let allocation: Allocation = allocate(store, tenant, kind, now.date())?;
            (allocation.number.clone(), Some(allocation))
        }
        Some(number) => match parse_trailing_sequence(&number) {
            Ok(sequence) => (
                number.clone(),
                Some(Allocation {
                    kind,
                    number,
                    sequence,
                }),
            ),
            Err(err @ DomainError::SequenceOutOfRange { .. }) => {
                return Err(CoreError::DomainViolation(err));
            }
            Err(err) => {
                warn!(
                    tenant = %tenant,
                    kind = %kind,
                    error = %err,
                    "Supplied number has no sequence; counter will not advance"
                );
                (number, None)
            }
        },
    };

    create_with_number(store, tenant, body, number, allocation.as_ref())
}

fn create_with_number<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    body: DocumentBody,
    number: String,
    allocation: Option<&Allocation>,
) -> Result<DocumentRecord, CoreError> {
    let record: DocumentRecord = store.create_document(&NewDocument {
        tenant_id: tenant,
        number,
        conversion_key: None,
        body,
    })?;

    if let Some(allocation) = allocation {
        confirm_allocation_best_effort(store, tenant, allocation);
    }

    info!(
        tenant = %tenant,
        kind = %record.kind(),
        id = %record.id,
        number = %record.number,
        "Created document"
    );
    Ok(record)
}

/// Reads one document of the tenant.
///
/// # Errors
///
/// * `CoreError::DocumentNotFound` if there is no such document
/// * `CoreError::Store` if the read fails
pub fn get_document<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    kind: DocumentKind,
    id: DocumentId,
) -> Result<DocumentRecord, CoreError> {
    store
        .get_document(tenant, kind, id)?
        .ok_or(CoreError::DocumentNotFound { kind, id })
}

/// Sets a document's status.
///
/// Any status of the document's kind may follow any other. Completing a work
/// order stamps `completed_date` with `now`; completing a project stamps
/// `actual_end_date` with today. Other statuses leave those fields as they are.
///
/// # Errors
///
/// * `CoreError::DomainViolation` if `status` belongs to another kind
/// * `CoreError::DocumentNotFound` if there is no such document
/// * `CoreError::Store` if the update fails
pub fn update_status<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    kind: DocumentKind,
    id: DocumentId,
    status: DocumentStatus,
    now: OffsetDateTime,
) -> Result<DocumentRecord, CoreError> {
    if status.kind() != kind {
        return Err(CoreError::DomainViolation(
            DomainError::StatusKindMismatch {
                expected: kind,
                actual: status.kind(),
            },
        ));
    }

    let patch: DocumentPatch = DocumentPatch::for_status(status, now);
    let record: DocumentRecord = store
        .update_document(tenant, kind, id, &patch)?
        .ok_or(CoreError::DocumentNotFound { kind, id })?;

    info!(tenant = %tenant, kind = %kind, id = %id, status = %status, "Updated document status");
    Ok(record)
}
