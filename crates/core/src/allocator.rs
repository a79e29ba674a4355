// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Allocation of document numbers.
//!
//! The next sequence is always `highest_used + 1`, recomputed from the stored
//! documents on every call. Nothing is reserved: two allocations that run
//! before either document is created receive the same number, and the second
//! create is rejected by the store's uniqueness constraint.

use time::Date;
use tracing::{debug, info, warn};
use tradeflow_domain::{
    DocumentKind, DomainError, KindNumbering, StoredKindNumbering, StoredNumberingConfig, TenantId,
    TenantNumberingConfig, validate_number_format,
};

use crate::error::CoreError;
use crate::sequence::highest_used;
use crate::store::DocumentStore;

/// A tentatively allocated number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub kind: DocumentKind,
    /// The rendered number.
    pub number: String,
    /// The raw sequence embedded in `number`.
    pub sequence: u64,
}

/// Loads the tenant's effective numbering configuration.
///
/// Stored values are merged over the compiled-in defaults field by field.
///
/// # Errors
///
/// Returns `CoreError::Store` if the configuration cannot be read.
pub fn load_numbering_config<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
) -> Result<TenantNumberingConfig, CoreError> {
    let stored: StoredNumberingConfig = store.get_numbering_config(tenant)?.unwrap_or_default();
    Ok(TenantNumberingConfig::merge(&stored))
}

/// Allocates the next number of `kind` for the tenant.
///
/// # Errors
///
/// Returns `CoreError::Store` if the configuration or the existing numbers
/// cannot be read, and `CoreError::DomainViolation` if the highest sequence
/// in use cannot be advanced.
pub fn allocate<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    kind: DocumentKind,
    today: Date,
) -> Result<Allocation, CoreError> {
    let config: TenantNumberingConfig = load_numbering_config(store, tenant)?;
    let numbering: &KindNumbering = config.get(kind);

    let highest: u64 = highest_used(store, tenant, kind)?;
    let sequence: u64 = next_sequence(highest)?;
    if numbering.next_counter != sequence {
        debug!(
            tenant = %tenant,
            kind = %kind,
            next_counter = numbering.next_counter,
            highest_used = highest,
            "Stored counter disagrees with existing documents"
        );
    }

    let number: String = numbering.render(sequence, today);

    info!(tenant = %tenant, kind = %kind, number = %number, sequence, "Allocated document number");

    Ok(Allocation {
        kind,
        number,
        sequence,
    })
}

/// Advances the stored counter of the allocation's kind to `sequence + 1`.
///
/// Call this only after the document carrying the number was created. The
/// update is a plain read-modify-write and never lowers a counter that is
/// already ahead of the allocation.
///
/// # Errors
///
/// Returns `CoreError::Store` if the configuration cannot be read or saved,
/// and `CoreError::DomainViolation` if `sequence` is `u64::MAX`.
pub fn confirm_allocation<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    allocation: &Allocation,
) -> Result<(), CoreError> {
    let next: u64 = next_sequence(allocation.sequence)?;
    let mut stored: StoredNumberingConfig =
        store.get_numbering_config(tenant)?.unwrap_or_default();
    let entry: &mut StoredKindNumbering = stored.get_mut(allocation.kind);
    let next_counter: u64 = entry.next_counter.map_or(next, |current| current.max(next));
    entry.next_counter = Some(next_counter);
    store.save_numbering_config(tenant, &stored)?;

    debug!(
        tenant = %tenant,
        kind = %allocation.kind,
        next_counter,
        "Confirmed allocation"
    );
    Ok(())
}

fn next_sequence(sequence: u64) -> Result<u64, CoreError> {
    sequence.checked_add(1).ok_or_else(|| {
        CoreError::DomainViolation(DomainError::SequenceOutOfRange {
            value: sequence.to_string(),
        })
    })
}

/// Confirms an allocation, logging instead of failing.
///
/// The counter is advisory, so a failed confirmation never undoes the
/// document that was already created.
pub(crate) fn confirm_allocation_best_effort<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    allocation: &Allocation,
) {
    if let Err(err) = confirm_allocation(store, tenant, allocation) {
        warn!(
            tenant = %tenant,
            kind = %allocation.kind,
            number = %allocation.number,
            error = %err,
            "Failed to advance numbering counter"
        );
    }
}

/// Updates the prefix and/or format of one kind.
///
/// Fields left as `None` keep their stored value.
///
/// # Errors
///
/// * `CoreError::DomainViolation` if the format is unusable
/// * `CoreError::Store` if the configuration cannot be read or saved
pub fn update_numbering_config<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    kind: DocumentKind,
    prefix: Option<String>,
    format: Option<String>,
) -> Result<TenantNumberingConfig, CoreError> {
    if let Some(format) = &format {
        validate_number_format(format)?;
    }

    let mut stored: StoredNumberingConfig =
        store.get_numbering_config(tenant)?.unwrap_or_default();
    let entry: &mut StoredKindNumbering = stored.get_mut(kind);
    if prefix.is_some() {
        entry.prefix = prefix;
    }
    if format.is_some() {
        entry.format = format;
    }
    store.save_numbering_config(tenant, &stored)?;

    info!(tenant = %tenant, kind = %kind, "Updated numbering configuration");
    Ok(TenantNumberingConfig::merge(&stored))
}
