// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The closed set of numbered document kinds.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A kind of numbered business document.
///
/// Every per-kind lookup (default prefix, default format, status set, storage
/// table) is an exhaustive match over this enum, so adding a kind is a
/// compile-time checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Estimate,
    Project,
    WorkOrder,
    Invoice,
    PurchaseOrder,
}

impl DocumentKind {
    /// All document kinds, in a stable order.
    pub const ALL: [Self; 5] = [
        Self::Estimate,
        Self::Project,
        Self::WorkOrder,
        Self::Invoice,
        Self::PurchaseOrder,
    ];

    /// Returns the string representation used for persistence and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Estimate => "estimate",
            Self::Project => "project",
            Self::WorkOrder => "work_order",
            Self::Invoice => "invoice",
            Self::PurchaseOrder => "purchase_order",
        }
    }

    /// The compiled-in prefix used when a tenant has not configured one.
    #[must_use]
    pub const fn default_prefix(&self) -> &'static str {
        match self {
            Self::Estimate => "EST",
            Self::Project => "PROJ",
            Self::WorkOrder => "WO",
            Self::Invoice => "INV",
            Self::PurchaseOrder => "PO",
        }
    }

    /// The compiled-in number format used when a tenant has not configured one.
    #[must_use]
    pub const fn default_format(&self) -> &'static str {
        match self {
            Self::Estimate => "EST-{YYYY}-{####}",
            Self::Project => "PROJ-{YYYY}-{####}",
            Self::WorkOrder => "WO-{YYYY}-{####}",
            Self::Invoice => "INV-{YYYY}-{####}",
            Self::PurchaseOrder => "PO-{YYYY}-{####}",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "estimate" => Ok(Self::Estimate),
            "project" => Ok(Self::Project),
            "work_order" => Ok(Self::WorkOrder),
            "invoice" => Ok(Self::Invoice),
            "purchase_order" => Ok(Self::PurchaseOrder),
            _ => Err(DomainError::InvalidDocumentKind(s.to_string())),
        }
    }
}
