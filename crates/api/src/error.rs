// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use tradeflow::{CoreError, StoreError};
use tradeflow_domain::DomainError;

use crate::validation::RequestError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No caller identity was presented.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The caller is known but has no tenant to act for.
    NoTenantContext {
        /// A human-readable description of what is missing.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A write lost a uniqueness race, typically on a document number.
    Conflict {
        /// A description of the collision.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::NoTenantContext { message } => write!(f, "No tenant context: {message}"),
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        Self::InvalidInput {
            field: String::from(err.field()),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidDocumentKind(_) => ApiError::InvalidInput {
            field: String::from("kind"),
            message,
        },
        DomainError::InvalidStatus { .. } | DomainError::StatusKindMismatch { .. } => {
            ApiError::InvalidInput {
                field: String::from("status"),
                message,
            }
        }
        DomainError::InvalidPriority(_) => ApiError::InvalidInput {
            field: String::from("priority"),
            message,
        },
        DomainError::NegativeAmount { field, .. } | DomainError::InvalidAmount { field, .. } => {
            ApiError::InvalidInput {
                field: String::from(field),
                message,
            }
        }
        DomainError::InvalidNumberFormat { .. } => ApiError::InvalidInput {
            field: String::from("format"),
            message,
        },
        DomainError::MalformedNumber { .. } | DomainError::SequenceOutOfRange { .. } => {
            ApiError::InvalidInput {
                field: String::from("number"),
                message,
            }
        }
        DomainError::ConversionNotAllowed { .. } => ApiError::DomainRuleViolation {
            rule: String::from("conversion_source_status"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// Store failures other than conflicts become `Internal` with the store's
/// message carried through.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::Unauthenticated => ApiError::AuthenticationFailed {
            reason: String::from("no caller identity"),
        },
        CoreError::ProfileNotFound { user_id } => ApiError::NoTenantContext {
            message: format!("user '{user_id}' has no profile"),
        },
        CoreError::TenantNotFound { user_id } => ApiError::NoTenantContext {
            message: format!("user '{user_id}' is not attached to a tenant"),
        },
        CoreError::SourceNotFound { kind, id } | CoreError::DocumentNotFound { kind, id } => {
            ApiError::ResourceNotFound {
                resource_type: String::from(kind.as_str()),
                message: format!("{kind} {id} does not exist"),
            }
        }
        CoreError::Store(StoreError::Conflict { message }) => ApiError::Conflict { message },
        CoreError::Store(store_err) => ApiError::Internal {
            message: store_err.to_string(),
        },
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
