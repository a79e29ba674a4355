// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use time::OffsetDateTime;
use time::macros::datetime;
use tradeflow_domain::{
    DocumentBody, DocumentId, DocumentKind, DocumentPatch, DocumentRecord, Estimate,
    EstimateStatus, NewDocument, Priority, StoredNumberingConfig, TenantId, Totals, WorkOrder,
    WorkOrderStatus,
};
use uuid::Uuid;

use crate::{DocumentStore, Profile, StoreError};

pub const TENANT: TenantId = TenantId::new(1);
pub const OTHER_TENANT: TenantId = TenantId::new(2);

pub fn test_now() -> OffsetDateTime {
    datetime!(2024-05-17 10:30:00 UTC)
}

/// Which store call should fail next.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailureInjection {
    pub list_numbers: bool,
    pub save_config: bool,
    pub create: bool,
    pub update: bool,
}

/// A store kept entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub profiles: BTreeMap<String, Option<TenantId>>,
    pub configs: BTreeMap<TenantId, StoredNumberingConfig>,
    pub documents: BTreeMap<(DocumentKind, DocumentId), DocumentRecord>,
    pub fail: FailureInjection,
    next_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        let mut store: Self = Self::default();
        store
            .profiles
            .insert(String::from("user-1"), Some(TENANT));
        store
    }

    pub fn insert_number(&mut self, tenant: TenantId, kind: DocumentKind, number: &str) {
        let body: DocumentBody = match kind {
            DocumentKind::WorkOrder => DocumentBody::WorkOrder(sample_work_order()),
            _ => DocumentBody::Estimate(sample_estimate(Decimal::ZERO)),
        };
        self.insert_raw(tenant, number, None, body, kind);
    }

    pub fn insert_document(
        &mut self,
        tenant: TenantId,
        number: &str,
        body: DocumentBody,
    ) -> DocumentRecord {
        let kind: DocumentKind = body.kind();
        self.insert_raw(tenant, number, None, body, kind)
    }

    fn insert_raw(
        &mut self,
        tenant: TenantId,
        number: &str,
        conversion_key: Option<Uuid>,
        body: DocumentBody,
        kind: DocumentKind,
    ) -> DocumentRecord {
        self.next_id += 1;
        let record: DocumentRecord = DocumentRecord {
            id: DocumentId::new(self.next_id),
            tenant_id: tenant,
            number: number.to_string(),
            conversion_key,
            created_at: test_now(),
            body,
        };
        self.documents.insert((kind, record.id), record.clone());
        record
    }

    pub fn documents_of(&self, kind: DocumentKind) -> Vec<&DocumentRecord> {
        self.documents
            .iter()
            .filter(|((k, _), _)| *k == kind)
            .map(|(_, record)| record)
            .collect()
    }
}

impl DocumentStore for InMemoryStore {
    fn find_profile(&mut self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self.profiles.get(user_id).map(|tenant_id| Profile {
            user_id: user_id.to_string(),
            tenant_id: *tenant_id,
        }))
    }

    fn list_document_numbers(
        &mut self,
        tenant: TenantId,
        kind: DocumentKind,
    ) -> Result<Vec<String>, StoreError> {
        if self.fail.list_numbers {
            return Err(StoreError::backend("list failed"));
        }
        Ok(self
            .documents
            .values()
            .filter(|r| r.tenant_id == tenant && r.kind() == kind)
            .map(|r| r.number.clone())
            .collect())
    }

    fn get_numbering_config(
        &mut self,
        tenant: TenantId,
    ) -> Result<Option<StoredNumberingConfig>, StoreError> {
        Ok(self.configs.get(&tenant).cloned())
    }

    fn save_numbering_config(
        &mut self,
        tenant: TenantId,
        config: &StoredNumberingConfig,
    ) -> Result<(), StoreError> {
        if self.fail.save_config {
            return Err(StoreError::backend("config save failed"));
        }
        self.configs.insert(tenant, config.clone());
        Ok(())
    }

    fn get_document(
        &mut self,
        tenant: TenantId,
        kind: DocumentKind,
        id: DocumentId,
    ) -> Result<Option<DocumentRecord>, StoreError> {
        Ok(self
            .documents
            .get(&(kind, id))
            .filter(|r| r.tenant_id == tenant)
            .cloned())
    }

    fn find_by_conversion_key(
        &mut self,
        tenant: TenantId,
        kind: DocumentKind,
        key: Uuid,
    ) -> Result<Option<DocumentRecord>, StoreError> {
        Ok(self
            .documents
            .values()
            .find(|r| r.tenant_id == tenant && r.kind() == kind && r.conversion_key == Some(key))
            .cloned())
    }

    fn create_document(&mut self, document: &NewDocument) -> Result<DocumentRecord, StoreError> {
        if self.fail.create {
            return Err(StoreError::backend("create failed"));
        }
        let kind: DocumentKind = document.body.kind();
        let duplicate: bool = self.documents.values().any(|r| {
            r.tenant_id == document.tenant_id && r.kind() == kind && r.number == document.number
        });
        if duplicate {
            return Err(StoreError::Conflict {
                message: format!("{kind} number '{}' already exists", document.number),
            });
        }
        Ok(self.insert_raw(
            document.tenant_id,
            &document.number,
            document.conversion_key,
            document.body.clone(),
            kind,
        ))
    }

    fn update_document(
        &mut self,
        tenant: TenantId,
        kind: DocumentKind,
        id: DocumentId,
        patch: &DocumentPatch,
    ) -> Result<Option<DocumentRecord>, StoreError> {
        if self.fail.update {
            return Err(StoreError::backend("update failed"));
        }
        let Some(record) = self
            .documents
            .get_mut(&(kind, id))
            .filter(|r| r.tenant_id == tenant)
        else {
            return Ok(None);
        };
        record
            .body
            .apply(patch)
            .map_err(|e| StoreError::Corrupt {
                message: e.to_string(),
            })?;
        Ok(Some(record.clone()))
    }
}

pub fn sample_estimate(total: Decimal) -> Estimate {
    Estimate {
        title: String::from("Bathroom refit"),
        description: Some(String::from("Tile and fixtures")),
        customer_id: 31,
        customer_site_id: Some(7),
        status: EstimateStatus::Approved,
        totals: Totals {
            subtotal: total,
            tax_rate: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            total_amount: total,
        },
    }
}

pub fn sample_work_order() -> WorkOrder {
    WorkOrder {
        title: String::from("Service boiler"),
        description: None,
        customer_id: 31,
        customer_site_id: None,
        project_id: None,
        status: WorkOrderStatus::Open,
        priority: Priority::Medium,
        notes: None,
        completed_date: None,
    }
}
