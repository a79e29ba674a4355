// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary of the Tradeflow engine.
//!
//! Handlers accept string-typed request DTOs, resolve the caller's tenant,
//! run the core operation and translate its errors into [`ApiError`]. Nothing
//! here knows about HTTP; the server crate maps `ApiError` to status codes.

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

mod error;
mod handlers;
mod request_response;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    allocate_number, convert_estimate_to_project, convert_project_to_work_order,
    convert_work_order_to_invoice, create_document, get_document, get_numbering_config,
    update_numbering_config, update_status,
};
pub use request_response::{
    AllocateNumberRequest, AllocateNumberResponse, ConversionResponse, ConvertRequest,
    ConvertWorkOrderRequest, CreateDocumentRequest, DocumentInfo, GetDocumentRequest,
    NumberingConfigResponse, NumberingEntryInfo, UpdateNumberingConfigRequest,
    UpdateStatusRequest,
};
pub use tradeflow::CallerIdentity;
pub use validation::RequestError;
