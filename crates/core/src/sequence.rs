// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of the highest sequence already used by a tenant.
//!
//! The scan reads every stored number of the kind. Stored counters are never
//! consulted here.

use tracing::warn;
use tradeflow_domain::{DocumentKind, TenantId, parse_trailing_sequence};

use crate::error::CoreError;
use crate::store::DocumentStore;

/// Returns the highest sequence in use for `kind`, or 0 if there is none.
///
/// Numbers without a trailing digit group are logged and skipped.
///
/// # Errors
///
/// Returns `CoreError::Store` if the numbers cannot be listed.
pub fn highest_used<S: DocumentStore>(
    store: &mut S,
    tenant: TenantId,
    kind: DocumentKind,
) -> Result<u64, CoreError> {
    let numbers: Vec<String> = store.list_document_numbers(tenant, kind)?;
    Ok(highest_sequence(tenant, kind, &numbers))
}

/// Returns the maximum trailing sequence across `numbers`.
#[must_use]
pub fn highest_sequence(tenant: TenantId, kind: DocumentKind, numbers: &[String]) -> u64 {
    numbers
        .iter()
        .filter_map(|number| match parse_trailing_sequence(number) {
            Ok(sequence) => Some(sequence),
            Err(err) => {
                warn!(
                    tenant = %tenant,
                    kind = %kind,
                    number = number.as_str(),
                    error = %err,
                    "Skipping malformed document number"
                );
                None
            }
        })
        .max()
        .unwrap_or(0)
}
