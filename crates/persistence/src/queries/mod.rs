// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! Every query is generated twice by `backend_fn!`, once suffixed `_sqlite`
//! and once `_mysql`. The `Persistence` adapter in `lib.rs` picks the version
//! matching its connection.

pub mod documents;
pub mod numbering;
pub mod profiles;

pub use documents::{
    find_by_conversion_key_mysql, find_by_conversion_key_sqlite, get_document_mysql,
    get_document_sqlite, list_document_numbers_mysql, list_document_numbers_sqlite,
};
pub use numbering::{get_numbering_config_mysql, get_numbering_config_sqlite};
pub use profiles::{find_profile_mysql, find_profile_sqlite};

/// Maps Diesel's `NotFound` to `Ok(None)`.
fn found<T>(
    result: Result<T, diesel::result::Error>,
) -> Result<Option<T>, crate::PersistenceError> {
    match result {
        Ok(row) => Ok(Some(row)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
