// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The document numbering and lifecycle conversion engine.
//!
//! Every operation takes a [`DocumentStore`] and performs its reads and writes
//! through it one call at a time.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocator;
mod documents;
mod error;
mod pipeline;
mod sequence;
mod store;
mod tenant;

#[cfg(test)]
mod tests;

pub use allocator::{
    Allocation, allocate, confirm_allocation, load_numbering_config, update_numbering_config,
};
pub use documents::{create_document, get_document, update_status};
pub use error::CoreError;
pub use pipeline::{
    ConversionOutcome, convert_estimate_to_project, convert_project_to_work_order,
    convert_work_order_to_invoice,
};
pub use sequence::{highest_sequence, highest_used};
pub use store::{DocumentStore, Profile, StoreError};
pub use tenant::{CallerIdentity, resolve_tenant};
