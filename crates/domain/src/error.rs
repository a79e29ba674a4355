// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::kind::DocumentKind;

/// Errors raised by domain rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The string does not name a document kind.
    InvalidDocumentKind(String),
    /// The status string is not valid for the document kind.
    InvalidStatus {
        /// The document kind the status was parsed for.
        kind: DocumentKind,
        /// The rejected status string.
        status: String,
    },
    /// The priority string is not a known priority.
    InvalidPriority(String),
    /// A status of one kind was applied to a document of another kind.
    StatusKindMismatch {
        /// The kind of the document being updated.
        expected: DocumentKind,
        /// The kind the supplied status belongs to.
        actual: DocumentKind,
    },
    /// A stored document number has no trailing digit group.
    MalformedNumber {
        /// The raw stored number.
        number: String,
    },
    /// A trailing sequence is too large to advance.
    SequenceOutOfRange {
        /// The offending number or sequence.
        value: String,
    },
    /// A monetary input was negative.
    NegativeAmount {
        /// The field that was negative.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A monetary value could not be parsed, or a computation on it
    /// overflowed.
    InvalidAmount {
        /// The field that failed to parse.
        field: &'static str,
        /// The raw stored value.
        value: String,
    },
    /// A number format template is unusable.
    InvalidNumberFormat {
        /// Why the format was rejected.
        reason: String,
    },
    /// The source document is not in a state that permits the conversion.
    ConversionNotAllowed {
        /// The conversion that was requested.
        conversion: &'static str,
        /// The current status of the source document.
        status: &'static str,
        /// Why the conversion is refused.
        reason: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDocumentKind(kind) => write!(f, "Invalid document kind: '{kind}'"),
            Self::InvalidStatus { kind, status } => {
                write!(f, "Invalid {kind} status: '{status}'")
            }
            Self::InvalidPriority(priority) => write!(f, "Invalid priority: '{priority}'"),
            Self::StatusKindMismatch { expected, actual } => {
                write!(
                    f,
                    "Cannot apply a {actual} status to a {expected} document"
                )
            }
            Self::MalformedNumber { number } => {
                write!(f, "Document number '{number}' has no trailing sequence")
            }
            Self::SequenceOutOfRange { value } => {
                write!(f, "Sequence of '{value}' is too large to advance")
            }
            Self::NegativeAmount { field, value } => {
                write!(f, "Amount '{field}' must not be negative, got {value}")
            }
            Self::InvalidAmount { field, value } => {
                write!(f, "Amount '{field}' is not a representable decimal value: '{value}'")
            }
            Self::InvalidNumberFormat { reason } => {
                write!(f, "Invalid number format: {reason}")
            }
            Self::ConversionNotAllowed {
                conversion,
                status,
                reason,
            } => {
                write!(
                    f,
                    "Conversion {conversion} not allowed from status '{status}': {reason}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
