// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;
use tradeflow::Profile;
use tradeflow_domain::TenantId;

use super::found;
use crate::diesel_schema::profiles;
use crate::error::PersistenceError;
use crate::rows::ProfileRow;

backend_fn! {
/// Looks up the profile of an authenticated user.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user has no profile.
pub fn find_profile(conn: &mut _, user_id: &str) -> Result<Option<Profile>, PersistenceError> {
    debug!(user_id, "Looking up profile");

    let row: Option<ProfileRow> = found(
        profiles::table
            .filter(profiles::user_id.eq(user_id))
            .select(ProfileRow::as_select())
            .first::<ProfileRow>(conn),
    )?;

    Ok(row.map(|row| Profile {
        user_id: row.user_id,
        tenant_id: row.tenant_id.map(TenantId::new),
    }))
}
}
