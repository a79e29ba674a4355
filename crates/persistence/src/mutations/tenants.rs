// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tenant and profile provisioning.
//!
//! The engine only reads profiles; these writes exist for the server's
//! bootstrap path and for tests.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;
use tradeflow_domain::TenantId;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{profiles, tenants};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a tenant.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_tenant(conn: &mut _, tenant_name: &str) -> Result<TenantId, PersistenceError> {
    diesel::insert_into(tenants::table)
        .values(tenants::tenant_name.eq(tenant_name))
        .execute(conn)?;

    let tenant_id: i64 = conn.get_last_insert_rowid()?;
    info!(tenant_id, tenant_name, "Created tenant");
    Ok(TenantId::new(tenant_id))
}
}

backend_fn! {
/// Creates or replaces the profile of `user_id`.
///
/// # Errors
///
/// Returns an error if the write fails, including when `tenant` does not
/// exist.
pub fn upsert_profile(
    conn: &mut _,
    user_id: &str,
    tenant: Option<TenantId>,
) -> Result<(), PersistenceError> {
    let tenant_id: Option<i64> = tenant.map(|t| t.value());

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let updated: usize = diesel::update(profiles::table)
            .filter(profiles::user_id.eq(user_id))
            .set(profiles::tenant_id.eq(tenant_id))
            .execute(conn)?;

        if updated == 0 {
            diesel::insert_into(profiles::table)
                .values((
                    profiles::user_id.eq(user_id),
                    profiles::tenant_id.eq(tenant_id),
                ))
                .execute(conn)?;
        }
        Ok(())
    })?;

    info!(user_id, tenant_id, "Saved profile");
    Ok(())
}
}
