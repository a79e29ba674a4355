// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;
use tradeflow_domain::{DocumentKind, StoredKindNumbering, StoredNumberingConfig, TenantId};

use crate::diesel_schema::numbering_configs;
use crate::error::PersistenceError;

backend_fn! {
/// Replaces a tenant's stored numbering configuration.
///
/// One row per document kind is written inside a single transaction, so a
/// reader sees either the old configuration or the new one.
///
/// # Errors
///
/// Returns an error if the write fails or a counter does not fit the column.
pub fn save_numbering_config(
    conn: &mut _,
    tenant: TenantId,
    config: &StoredNumberingConfig,
) -> Result<(), PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::delete(numbering_configs::table)
            .filter(numbering_configs::tenant_id.eq(tenant.value()))
            .execute(conn)?;

        for kind in DocumentKind::ALL {
            let stored: &StoredKindNumbering = config.get(kind);
            let next_counter: Option<i64> = stored
                .next_counter
                .map(|c| {
                    i64::try_from(c).map_err(|_| {
                        PersistenceError::QueryFailed(format!("Counter {c} out of range"))
                    })
                })
                .transpose()?;

            diesel::insert_into(numbering_configs::table)
                .values((
                    numbering_configs::tenant_id.eq(tenant.value()),
                    numbering_configs::document_kind.eq(kind.as_str()),
                    numbering_configs::prefix.eq(stored.prefix.as_deref()),
                    numbering_configs::number_format.eq(stored.format.as_deref()),
                    numbering_configs::next_counter.eq(next_counter),
                ))
                .execute(conn)?;
        }
        Ok(())
    })?;

    debug!(tenant = %tenant, "Saved numbering configuration");
    Ok(())
}
}
