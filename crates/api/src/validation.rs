// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of string and numeric request fields into domain values.

use thiserror::Error;
use tradeflow_domain::{DocumentId, DocumentKind, DocumentStatus};

/// A request field could not be turned into a domain value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Unknown document kind '{0}'")]
    UnknownKind(String),

    #[error("'{status}' is not a {kind} status")]
    UnknownStatus { kind: DocumentKind, status: String },

    #[error("Document id must be positive, got {0}")]
    InvalidId(i64),

    #[error("Document number must not be blank")]
    BlankNumber,
}

impl RequestError {
    /// The request field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::UnknownKind(_) => "kind",
            Self::UnknownStatus { .. } => "status",
            Self::InvalidId(_) => "id",
            Self::BlankNumber => "number",
        }
    }
}

/// Parses a document kind such as `work_order`.
///
/// # Errors
///
/// Returns `RequestError::UnknownKind` if `raw` names no kind.
pub fn parse_kind(raw: &str) -> Result<DocumentKind, RequestError> {
    raw.trim()
        .parse()
        .map_err(|_| RequestError::UnknownKind(raw.to_string()))
}

/// Parses a status string for `kind`.
///
/// # Errors
///
/// Returns `RequestError::UnknownStatus` if `raw` is not a status of `kind`.
pub fn parse_status(kind: DocumentKind, raw: &str) -> Result<DocumentStatus, RequestError> {
    DocumentStatus::parse(kind, raw.trim()).map_err(|_| RequestError::UnknownStatus {
        kind,
        status: raw.to_string(),
    })
}

/// Checks a document id from the wire.
///
/// # Errors
///
/// Returns `RequestError::InvalidId` for zero or negative ids.
pub const fn parse_id(raw: i64) -> Result<DocumentId, RequestError> {
    if raw <= 0 {
        return Err(RequestError::InvalidId(raw));
    }
    Ok(DocumentId::new(raw))
}

/// Normalizes a caller-supplied document number.
///
/// `None` means "allocate one"; a blank string is rejected rather than
/// silently treated as absent.
///
/// # Errors
///
/// Returns `RequestError::BlankNumber` for an empty or whitespace number.
pub fn parse_number(raw: Option<&str>) -> Result<Option<String>, RequestError> {
    match raw {
        None => Ok(None),
        Some(n) if n.trim().is_empty() => Err(RequestError::BlankNumber),
        Some(n) => Ok(Some(n.trim().to_string())),
    }
}
