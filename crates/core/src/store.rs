// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The storage port consumed by the engine.
//!
//! Every call is a single read or write. The engine never opens a transaction
//! across calls, so a multi-step operation can stop halfway when a call fails.

use thiserror::Error;
use tradeflow_domain::{
    DocumentId, DocumentKind, DocumentPatch, DocumentRecord, NewDocument, StoredNumberingConfig,
    TenantId,
};
use uuid::Uuid;

/// A failure reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend could not complete the call.
    #[error("Store failure: {message}")]
    Backend { message: String },
    /// A write collided with a uniqueness constraint.
    #[error("Store conflict: {message}")]
    Conflict { message: String },
    /// A stored row could not be read back into a document.
    #[error("Corrupt stored data: {message}")]
    Corrupt { message: String },
}

impl StoreError {
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// A caller's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user_id: String,
    /// `None` when the profile has not been attached to a tenant.
    pub tenant_id: Option<TenantId>,
}

/// Persistent storage for profiles, numbering configuration and documents.
///
/// All document reads and writes are scoped to a tenant. A document of another
/// tenant is indistinguishable from a missing one.
pub trait DocumentStore {
    /// Looks up the profile of a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn find_profile(&mut self, user_id: &str) -> Result<Option<Profile>, StoreError>;

    /// Lists every stored number of `kind` for the tenant, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn list_document_numbers(
        &mut self,
        tenant: TenantId,
        kind: DocumentKind,
    ) -> Result<Vec<String>, StoreError>;

    /// Reads the tenant's stored numbering configuration, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn get_numbering_config(
        &mut self,
        tenant: TenantId,
    ) -> Result<Option<StoredNumberingConfig>, StoreError>;

    /// Replaces the tenant's stored numbering configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn save_numbering_config(
        &mut self,
        tenant: TenantId,
        config: &StoredNumberingConfig,
    ) -> Result<(), StoreError>;

    /// Reads one document.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn get_document(
        &mut self,
        tenant: TenantId,
        kind: DocumentKind,
        id: DocumentId,
    ) -> Result<Option<DocumentRecord>, StoreError>;

    /// Finds the document of `kind` produced by the conversion with `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn find_by_conversion_key(
        &mut self,
        tenant: TenantId,
        kind: DocumentKind,
        key: Uuid,
    ) -> Result<Option<DocumentRecord>, StoreError>;

    /// Persists a new document and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the number is already taken within
    /// the tenant for that kind, or another error if the store call fails.
    fn create_document(&mut self, document: &NewDocument) -> Result<DocumentRecord, StoreError>;

    /// Applies a patch to one document and returns the updated record.
    ///
    /// Returns `Ok(None)` if the document does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn update_document(
        &mut self,
        tenant: TenantId,
        kind: DocumentKind,
        id: DocumentId,
        patch: &DocumentPatch,
    ) -> Result<Option<DocumentRecord>, StoreError>;
}
