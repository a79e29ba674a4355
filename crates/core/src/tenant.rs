// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tracing::debug;
use tradeflow_domain::TenantId;

use crate::error::CoreError;
use crate::store::{DocumentStore, Profile};

/// The authenticated user on whose behalf an operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    user_id: String,
}

impl CallerIdentity {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// Resolves the tenant the caller acts for.
///
/// # Errors
///
/// * `CoreError::Unauthenticated` if there is no caller
/// * `CoreError::ProfileNotFound` if the caller has no profile
/// * `CoreError::TenantNotFound` if the profile has no tenant
/// * `CoreError::Store` if the profile lookup fails
pub fn resolve_tenant<S: DocumentStore>(
    store: &mut S,
    caller: Option<&CallerIdentity>,
) -> Result<TenantId, CoreError> {
    let caller: &CallerIdentity = caller.ok_or(CoreError::Unauthenticated)?;

    let profile: Profile =
        store
            .find_profile(caller.user_id())?
            .ok_or_else(|| CoreError::ProfileNotFound {
                user_id: caller.user_id().to_string(),
            })?;

    let tenant: TenantId = profile.tenant_id.ok_or_else(|| CoreError::TenantNotFound {
        user_id: caller.user_id().to_string(),
    })?;

    debug!(user_id = caller.user_id(), tenant = %tenant, "Resolved caller tenant");
    Ok(tenant)
}
