// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Inserts read back their identifier through
//! `PersistenceBackend::get_last_insert_rowid`; everything else is plain
//! Diesel DSL.

pub mod documents;
pub mod numbering;
pub mod tenants;

pub use documents::{
    insert_document_mysql, insert_document_sqlite, write_lifecycle_fields_mysql,
    write_lifecycle_fields_sqlite,
};
pub use numbering::{save_numbering_config_mysql, save_numbering_config_sqlite};
pub use tenants::{
    create_tenant_mysql, create_tenant_sqlite, upsert_profile_mysql, upsert_profile_sqlite,
};
