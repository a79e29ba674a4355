// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{InMemoryStore, TENANT};
use crate::{CallerIdentity, CoreError, resolve_tenant};

#[test]
fn test_resolve_tenant_for_known_user() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let caller: CallerIdentity = CallerIdentity::new("user-1");

    assert_eq!(resolve_tenant(&mut store, Some(&caller)), Ok(TENANT));
}

#[test]
fn test_resolve_tenant_without_caller_is_unauthenticated() {
    let mut store: InMemoryStore = InMemoryStore::new();
    assert_eq!(
        resolve_tenant(&mut store, None),
        Err(CoreError::Unauthenticated)
    );
}

#[test]
fn test_resolve_tenant_without_profile() {
    let mut store: InMemoryStore = InMemoryStore::new();
    let caller: CallerIdentity = CallerIdentity::new("stranger");

    assert_eq!(
        resolve_tenant(&mut store, Some(&caller)),
        Err(CoreError::ProfileNotFound {
            user_id: String::from("stranger"),
        })
    );
}

#[test]
fn test_resolve_tenant_for_profile_without_tenant() {
    let mut store: InMemoryStore = InMemoryStore::new();
    store.profiles.insert(String::from("drifter"), None);
    let caller: CallerIdentity = CallerIdentity::new("drifter");

    assert_eq!(
        resolve_tenant(&mut store, Some(&caller)),
        Err(CoreError::TenantNotFound {
            user_id: String::from("drifter"),
        })
    );
}
