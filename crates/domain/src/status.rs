// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-kind document status sets and status-triggered side effects.
//!
//! Transitions are not guarded: any status of a kind may follow any other
//! status of the same kind. The only conditional behavior is the timestamp
//! stamping performed by [`DocumentPatch::for_status`](crate::DocumentPatch::for_status).

use crate::error::DomainError;
use crate::kind::DocumentKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Generates a status enum with its string mapping.
///
/// The first listed variant is the initial status of the kind.
macro_rules! document_status {
    (
        $(#[$meta:meta])*
        $name:ident for $kind:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
        terminal: [$($terminal:ident),*]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All statuses of this kind, initial status first.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the string representation used for persistence and the API.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            /// Returns true if documents in this status are logically immutable.
            #[must_use]
            #[allow(unused_variables)]
            pub const fn is_terminal(&self) -> bool {
                matches!(self, $(Self::$terminal)|*)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(DomainError::InvalidStatus {
                        kind: DocumentKind::$kind,
                        status: s.to_string(),
                    }),
                }
            }
        }
    };
}

document_status! {
    /// Estimate lifecycle: draft → sent → {approved, rejected, expired} → converted.
    EstimateStatus for Estimate {
        Draft => "draft",
        Sent => "sent",
        Approved => "approved",
        Rejected => "rejected",
        Expired => "expired",
        Converted => "converted",
    }
    terminal: [Converted]
}

document_status! {
    /// Project lifecycle: planning → `in_progress` → {`on_hold`, completed, cancelled}.
    ///
    /// `converted` closes a project that produced a work order.
    ProjectStatus for Project {
        Planning => "planning",
        InProgress => "in_progress",
        OnHold => "on_hold",
        Completed => "completed",
        Cancelled => "cancelled",
        Converted => "converted",
    }
    terminal: [Cancelled, Converted]
}

document_status! {
    /// Work order lifecycle: open → scheduled → `in_progress` → {completed, cancelled}.
    ///
    /// `converted` closes a completed work order that has been invoiced.
    WorkOrderStatus for WorkOrder {
        Open => "open",
        Scheduled => "scheduled",
        InProgress => "in_progress",
        Completed => "completed",
        Cancelled => "cancelled",
        Converted => "converted",
    }
    terminal: [Cancelled, Converted]
}

document_status! {
    /// Invoice lifecycle: draft → sent → {paid, overdue}, or cancelled.
    InvoiceStatus for Invoice {
        Draft => "draft",
        Sent => "sent",
        Paid => "paid",
        Overdue => "overdue",
        Cancelled => "cancelled",
    }
    terminal: [Cancelled]
}

document_status! {
    /// Purchase order lifecycle: draft → sent → {approved, received, cancelled}.
    PurchaseOrderStatus for PurchaseOrder {
        Draft => "draft",
        Sent => "sent",
        Approved => "approved",
        Received => "received",
        Cancelled => "cancelled",
    }
    terminal: [Cancelled]
}

/// A status tagged with the document kind it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum DocumentStatus {
    Estimate(EstimateStatus),
    Project(ProjectStatus),
    WorkOrder(WorkOrderStatus),
    Invoice(InvoiceStatus),
    PurchaseOrder(PurchaseOrderStatus),
}

impl DocumentStatus {
    /// Parses a status string for the given kind.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the string is not a status of `kind`.
    pub fn parse(kind: DocumentKind, status: &str) -> Result<Self, DomainError> {
        Ok(match kind {
            DocumentKind::Estimate => Self::Estimate(status.parse()?),
            DocumentKind::Project => Self::Project(status.parse()?),
            DocumentKind::WorkOrder => Self::WorkOrder(status.parse()?),
            DocumentKind::Invoice => Self::Invoice(status.parse()?),
            DocumentKind::PurchaseOrder => Self::PurchaseOrder(status.parse()?),
        })
    }

    /// The status a newly created document of `kind` starts in.
    #[must_use]
    pub fn initial(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Estimate => Self::Estimate(EstimateStatus::default()),
            DocumentKind::Project => Self::Project(ProjectStatus::default()),
            DocumentKind::WorkOrder => Self::WorkOrder(WorkOrderStatus::default()),
            DocumentKind::Invoice => Self::Invoice(InvoiceStatus::default()),
            DocumentKind::PurchaseOrder => Self::PurchaseOrder(PurchaseOrderStatus::default()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        match self {
            Self::Estimate(_) => DocumentKind::Estimate,
            Self::Project(_) => DocumentKind::Project,
            Self::WorkOrder(_) => DocumentKind::WorkOrder,
            Self::Invoice(_) => DocumentKind::Invoice,
            Self::PurchaseOrder(_) => DocumentKind::PurchaseOrder,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Estimate(s) => s.as_str(),
            Self::Project(s) => s.as_str(),
            Self::WorkOrder(s) => s.as_str(),
            Self::Invoice(s) => s.as_str(),
            Self::PurchaseOrder(s) => s.as_str(),
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        match self {
            Self::Estimate(s) => s.is_terminal(),
            Self::Project(s) => s.is_terminal(),
            Self::WorkOrder(s) => s.is_terminal(),
            Self::Invoice(s) => s.is_terminal(),
            Self::PurchaseOrder(s) => s.is_terminal(),
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scheduling priority shared by projects and work orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Reads a stored priority, treating anything unrecognized as `Medium`.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(DomainError::InvalidPriority(s.to_string())),
        }
    }
}
