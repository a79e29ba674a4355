// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tradeflow_domain::{DocumentId, DocumentKind, DomainError};

use crate::store::StoreError;

/// Errors raised by the numbering and conversion engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No caller identity was supplied.
    Unauthenticated,
    /// The caller has no profile.
    ProfileNotFound {
        /// The caller's user id.
        user_id: String,
    },
    /// The caller's profile is not attached to a tenant.
    TenantNotFound {
        /// The caller's user id.
        user_id: String,
    },
    /// The document a conversion reads from does not exist.
    SourceNotFound {
        /// The kind of the missing source.
        kind: DocumentKind,
        /// The id of the missing source.
        id: DocumentId,
    },
    /// A document addressed directly does not exist.
    DocumentNotFound {
        /// The kind of the missing document.
        kind: DocumentKind,
        /// The id of the missing document.
        id: DocumentId,
    },
    /// The store failed. The message is carried unchanged.
    Store(StoreError),
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "No authenticated caller"),
            Self::ProfileNotFound { user_id } => {
                write!(f, "No profile found for user '{user_id}'")
            }
            Self::TenantNotFound { user_id } => {
                write!(f, "User '{user_id}' is not attached to a tenant")
            }
            Self::SourceNotFound { kind, id } => {
                write!(f, "Conversion source {kind} {id} not found")
            }
            Self::DocumentNotFound { kind, id } => write!(f, "Document {kind} {id} not found"),
            Self::Store(err) => write!(f, "{err}"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
