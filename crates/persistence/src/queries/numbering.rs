// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, warn};
use tradeflow_domain::{DocumentKind, StoredNumberingConfig, TenantId};

use crate::diesel_schema::numbering_configs;
use crate::error::PersistenceError;
use crate::rows::NumberingConfigRow;

backend_fn! {
/// Reads a tenant's stored numbering configuration.
///
/// Returns `Ok(None)` when the tenant has no rows at all. Rows for a
/// document kind this build does not know are skipped.
///
/// # Errors
///
/// Returns an error if the query fails or a stored counter is negative.
pub fn get_numbering_config(
    conn: &mut _,
    tenant: TenantId,
) -> Result<Option<StoredNumberingConfig>, PersistenceError> {
    let rows: Vec<NumberingConfigRow> = numbering_configs::table
        .filter(numbering_configs::tenant_id.eq(tenant.value()))
        .select(NumberingConfigRow::as_select())
        .load::<NumberingConfigRow>(conn)?;

    if rows.is_empty() {
        debug!(tenant = %tenant, "No stored numbering configuration");
        return Ok(None);
    }

    let mut config: StoredNumberingConfig = StoredNumberingConfig::default();
    for row in &rows {
        match row.document_kind.parse::<DocumentKind>() {
            Ok(kind) => *config.get_mut(kind) = row.to_stored()?,
            Err(e) => warn!(tenant = %tenant, error = %e, "Skipping numbering row"),
        }
    }
    Ok(Some(config))
}
}
