// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-tenant numbering configuration.
//!
//! Tenants may store a partial configuration. The effective configuration is
//! produced by merging stored values over the compiled-in defaults field by
//! field, never by replacing a whole kind entry.
//!
//! `next_counter` is advisory. It may lag behind the numbers actually in use
//! and is never consulted when choosing the next sequence.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::DomainError;
use crate::format::render_number;
use crate::kind::DocumentKind;

/// Token replaced with the configured prefix before rendering.
const PREFIX_TOKEN: &str = "{PREFIX}";

/// Effective numbering settings for one document kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindNumbering {
    pub prefix: String,
    pub format: String,
    pub next_counter: u64,
}

impl KindNumbering {
    /// The compiled-in settings for a kind.
    #[must_use]
    pub fn defaults(kind: DocumentKind) -> Self {
        Self {
            prefix: kind.default_prefix().to_string(),
            format: kind.default_format().to_string(),
            next_counter: 1,
        }
    }

    /// Renders a number for `sequence` using this kind's format.
    ///
    /// A `{PREFIX}` token in the format is replaced with the configured prefix
    /// before the year and sequence placeholders are rendered.
    #[must_use]
    pub fn render(&self, sequence: u64, today: Date) -> String {
        let template: String = self.format.replace(PREFIX_TOKEN, &self.prefix);
        render_number(&template, sequence, today)
    }

    fn merged(kind: DocumentKind, stored: &StoredKindNumbering) -> Self {
        let defaults: Self = Self::defaults(kind);
        Self {
            prefix: non_blank(stored.prefix.as_deref()).unwrap_or(defaults.prefix),
            format: non_blank(stored.format.as_deref()).unwrap_or(defaults.format),
            next_counter: stored.next_counter.unwrap_or(defaults.next_counter),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(ToString::to_string)
}

/// Stored (possibly partial) settings for one document kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredKindNumbering {
    pub prefix: Option<String>,
    pub format: Option<String>,
    pub next_counter: Option<u64>,
}

/// A tenant's stored numbering configuration, as read from the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredNumberingConfig {
    pub estimate: StoredKindNumbering,
    pub project: StoredKindNumbering,
    pub work_order: StoredKindNumbering,
    pub invoice: StoredKindNumbering,
    pub purchase_order: StoredKindNumbering,
}

impl StoredNumberingConfig {
    #[must_use]
    pub const fn get(&self, kind: DocumentKind) -> &StoredKindNumbering {
        match kind {
            DocumentKind::Estimate => &self.estimate,
            DocumentKind::Project => &self.project,
            DocumentKind::WorkOrder => &self.work_order,
            DocumentKind::Invoice => &self.invoice,
            DocumentKind::PurchaseOrder => &self.purchase_order,
        }
    }

    pub fn get_mut(&mut self, kind: DocumentKind) -> &mut StoredKindNumbering {
        match kind {
            DocumentKind::Estimate => &mut self.estimate,
            DocumentKind::Project => &mut self.project,
            DocumentKind::WorkOrder => &mut self.work_order,
            DocumentKind::Invoice => &mut self.invoice,
            DocumentKind::PurchaseOrder => &mut self.purchase_order,
        }
    }
}

/// The effective numbering configuration for a tenant, one entry per kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantNumberingConfig {
    pub estimate: KindNumbering,
    pub project: KindNumbering,
    pub work_order: KindNumbering,
    pub invoice: KindNumbering,
    pub purchase_order: KindNumbering,
}

impl TenantNumberingConfig {
    /// The configuration of a tenant that has stored nothing.
    #[must_use]
    pub fn defaults() -> Self {
        Self::merge(&StoredNumberingConfig::default())
    }

    /// Merges stored values over the defaults, field by field.
    #[must_use]
    pub fn merge(stored: &StoredNumberingConfig) -> Self {
        Self {
            estimate: KindNumbering::merged(DocumentKind::Estimate, &stored.estimate),
            project: KindNumbering::merged(DocumentKind::Project, &stored.project),
            work_order: KindNumbering::merged(DocumentKind::WorkOrder, &stored.work_order),
            invoice: KindNumbering::merged(DocumentKind::Invoice, &stored.invoice),
            purchase_order: KindNumbering::merged(
                DocumentKind::PurchaseOrder,
                &stored.purchase_order,
            ),
        }
    }

    #[must_use]
    pub const fn get(&self, kind: DocumentKind) -> &KindNumbering {
        match kind {
            DocumentKind::Estimate => &self.estimate,
            DocumentKind::Project => &self.project,
            DocumentKind::WorkOrder => &self.work_order,
            DocumentKind::Invoice => &self.invoice,
            DocumentKind::PurchaseOrder => &self.purchase_order,
        }
    }

    pub fn get_mut(&mut self, kind: DocumentKind) -> &mut KindNumbering {
        match kind {
            DocumentKind::Estimate => &mut self.estimate,
            DocumentKind::Project => &mut self.project,
            DocumentKind::WorkOrder => &mut self.work_order,
            DocumentKind::Invoice => &mut self.invoice,
            DocumentKind::PurchaseOrder => &mut self.purchase_order,
        }
    }
}

/// Validates a number format before it is stored.
///
/// # Errors
///
/// Returns `DomainError::InvalidNumberFormat` if the format is blank or longer
/// than 64 characters.
pub fn validate_number_format(format: &str) -> Result<(), DomainError> {
    if format.trim().is_empty() {
        return Err(DomainError::InvalidNumberFormat {
            reason: String::from("format must not be blank"),
        });
    }
    if format.chars().count() > 64 {
        return Err(DomainError::InvalidNumberFormat {
            reason: String::from("format must be at most 64 characters"),
        });
    }
    Ok(())
}
