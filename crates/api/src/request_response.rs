// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};
use tradeflow_domain::{
    DocumentBody, DocumentKind, DocumentRecord, InvoiceAmounts, KindNumbering,
    TenantNumberingConfig,
};

/// API request to allocate the next number of a kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocateNumberRequest {
    /// The document kind, e.g. `work_order`.
    pub kind: String,
}

/// API response carrying a tentatively allocated number.
///
/// The number is not reserved. Nothing stops another caller from being
/// handed the same number until a document carrying it exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocateNumberResponse {
    pub kind: DocumentKind,
    /// The rendered number.
    pub number: String,
    /// The sequence embedded in the number.
    pub sequence: u64,
}

/// Effective numbering settings of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingEntryInfo {
    pub kind: DocumentKind,
    pub prefix: String,
    pub format: String,
    /// The advisory counter. Allocation never relies on it.
    pub next_counter: u64,
}

/// API response listing the tenant's effective numbering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingConfigResponse {
    /// One entry per document kind, in declaration order.
    pub entries: Vec<NumberingEntryInfo>,
}

impl From<&TenantNumberingConfig> for NumberingConfigResponse {
    fn from(config: &TenantNumberingConfig) -> Self {
        let entries: Vec<NumberingEntryInfo> = DocumentKind::ALL
            .iter()
            .map(|kind| {
                let numbering: &KindNumbering = config.get(*kind);
                NumberingEntryInfo {
                    kind: *kind,
                    prefix: numbering.prefix.clone(),
                    format: numbering.format.clone(),
                    next_counter: numbering.next_counter,
                }
            })
            .collect();
        Self { entries }
    }
}

/// API request to change the prefix and/or format of one kind.
///
/// Omitted fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNumberingConfigRequest {
    pub kind: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// API request to create a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    /// A number obtained earlier from an allocation. When absent one is
    /// allocated as part of the create.
    #[serde(default)]
    pub number: Option<String>,
    /// The document content, tagged with its kind.
    pub document: DocumentBody,
}

/// A document as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub id: i64,
    pub kind: DocumentKind,
    pub number: String,
    /// The status string of the document's kind.
    pub status: String,
    /// Set only on documents produced by a conversion.
    pub conversion_key: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    pub body: DocumentBody,
}

impl DocumentInfo {
    /// Builds the API view of a stored document.
    ///
    /// A timestamp that cannot be rendered as RFC 3339 is returned empty.
    #[must_use]
    pub fn from_record(record: &DocumentRecord) -> Self {
        let created_at: String = record
            .created_at
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default();
        Self {
            id: record.id.value(),
            kind: record.kind(),
            number: record.number.clone(),
            status: String::from(record.status().as_str()),
            conversion_key: record.conversion_key.map(|key| key.to_string()),
            created_at,
            body: record.body.clone(),
        }
    }
}

/// API request to look up one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDocumentRequest {
    pub kind: String,
    pub id: i64,
}

/// API request to move a document to another status of its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub kind: String,
    pub id: i64,
    pub status: String,
}

/// API request to convert an estimate or a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertRequest {
    /// The id of the document being converted.
    pub source_id: i64,
}

/// API request to invoice a completed work order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertWorkOrderRequest {
    pub source_id: i64,
    /// Labor, materials and tax rate. Missing values count as zero.
    #[serde(flatten)]
    pub amounts: InvoiceAmounts,
}

/// API response for a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    /// The source document after it was closed.
    pub source: DocumentInfo,
    /// The document produced by the conversion.
    pub target: DocumentInfo,
    /// True when an earlier attempt had already created the target.
    pub resumed: bool,
}
