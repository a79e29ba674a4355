// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Every handler resolves the caller's tenant first and runs the operation
//! against that tenant only. Core errors are translated at this boundary.

use time::{Date, OffsetDateTime};
use tracing::info;
use tradeflow::{Allocation, CallerIdentity, ConversionOutcome, DocumentStore, resolve_tenant};
use tradeflow_domain::{
    DocumentId, DocumentKind, DocumentRecord, DocumentStatus, TenantId, TenantNumberingConfig,
};

use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    AllocateNumberRequest, AllocateNumberResponse, ConversionResponse, ConvertRequest,
    ConvertWorkOrderRequest, CreateDocumentRequest, DocumentInfo, GetDocumentRequest,
    NumberingConfigResponse, UpdateNumberingConfigRequest, UpdateStatusRequest,
};
use crate::validation::{parse_id, parse_kind, parse_number, parse_status};

fn tenant_of<S: DocumentStore>(
    store: &mut S,
    caller: Option<&CallerIdentity>,
) -> Result<TenantId, ApiError> {
    resolve_tenant(store, caller).map_err(translate_core_error)
}

fn conversion_response(outcome: &ConversionOutcome) -> ConversionResponse {
    ConversionResponse {
        source: DocumentInfo::from_record(&outcome.source),
        target: DocumentInfo::from_record(&outcome.target),
        resumed: outcome.resumed,
    }
}

/// Allocates the next number of a kind for the caller's tenant.
///
/// # Errors
///
/// * `ApiError::AuthenticationFailed` / `ApiError::NoTenantContext` if the
///   caller cannot be tied to a tenant
/// * `ApiError::InvalidInput` for an unknown kind
/// * `ApiError::Internal` if the store fails
pub fn allocate_number<S: DocumentStore>(
    store: &mut S,
    caller: Option<&CallerIdentity>,
    request: &AllocateNumberRequest,
    today: Date,
) -> Result<AllocateNumberResponse, ApiError> {
    let tenant: TenantId = tenant_of(store, caller)?;
    let kind: DocumentKind = parse_kind(&request.kind)?;

    let allocation: Allocation =
        tradeflow::allocate(store, tenant, kind, today).map_err(translate_core_error)?;

    Ok(AllocateNumberResponse {
        kind: allocation.kind,
        number: allocation.number,
        sequence: allocation.sequence,
    })
}

/// Returns the caller's effective numbering configuration.
///
/// # Errors
///
/// Returns an error if the caller has no tenant or the store fails.
pub fn get_numbering_config<S: DocumentStore>(
    store: &mut S,
    caller: Option<&CallerIdentity>,
) -> Result<NumberingConfigResponse, ApiError> {
    let tenant: TenantId = tenant_of(store, caller)?;
    let config: TenantNumberingConfig =
        tradeflow::load_numbering_config(store, tenant).map_err(translate_core_error)?;
    Ok(NumberingConfigResponse::from(&config))
}

/// Changes the prefix and/or format of one kind.
///
/// # Errors
///
/// * `ApiError::InvalidInput` for an unknown kind or unusable format
/// * the tenant resolution and store errors of the other handlers
pub fn update_numbering_config<S: DocumentStore>(
    store: &mut S,
    caller: Option<&CallerIdentity>,
    request: &UpdateNumberingConfigRequest,
) -> Result<NumberingConfigResponse, ApiError> {
    let tenant: TenantId = tenant_of(store, caller)?;
    let kind: DocumentKind = parse_kind(&request.kind)?;

    let config: TenantNumberingConfig = tradeflow::update_numbering_config(
        store,
        tenant,
        kind,
        request.prefix.clone(),
        request.format.clone(),
    )
    .map_err(translate_core_error)?;

    info!(tenant = %tenant, kind = %kind, "Numbering configuration changed via API");
    Ok(NumberingConfigResponse::from(&config))
}

/// Creates a document, allocating a number when the request carries none.
///
/// The stored status is always the initial status of the kind, whatever the
/// request body says.
///
/// # Errors
///
/// * `ApiError::InvalidInput` for a blank number or a negative amount
/// * `ApiError::Conflict` if the number is already taken
/// * the tenant resolution and store errors of the other handlers
pub fn create_document<S: DocumentStore>(
    store: &mut S,
    caller: Option<&CallerIdentity>,
    request: CreateDocumentRequest,
    now: OffsetDateTime,
) -> Result<DocumentInfo, ApiError> {
    let tenant: TenantId = tenant_of(store, caller)?;
    let number: Option<String> = parse_number(request.number.as_deref())?;

    let record: DocumentRecord =
        tradeflow::create_document(store, tenant, request.document, number, now)
            .map_err(translate_core_error)?;

    Ok(DocumentInfo::from_record(&record))
}

/// Reads one document of the caller's tenant.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the document does not exist for
/// the tenant.
pub fn get_document<S: DocumentStore>(
    store: &mut S,
    caller: Option<&CallerIdentity>,
    request: &GetDocumentRequest,
) -> Result<DocumentInfo, ApiError> {
    let tenant: TenantId = tenant_of(store, caller)?;
    let kind: DocumentKind = parse_kind(&request.kind)?;
    let id: DocumentId = parse_id(request.id)?;

    let record: DocumentRecord =
        tradeflow::get_document(store, tenant, kind, id).map_err(translate_core_error)?;
    Ok(DocumentInfo::from_record(&record))
}

/// Moves a document to another status of its kind.
///
/// # Errors
///
/// * `ApiError::InvalidInput` if the status does not belong to the kind
/// * `ApiError::ResourceNotFound` if the document does not exist
/// * the tenant resolution and store errors of the other handlers
pub fn update_status<S: DocumentStore>(
    store: &mut S,
    caller: Option<&CallerIdentity>,
    request: &UpdateStatusRequest,
    now: OffsetDateTime,
) -> Result<DocumentInfo, ApiError> {
    let tenant: TenantId = tenant_of(store, caller)?;
    let kind: DocumentKind = parse_kind(&request.kind)?;
    let id: DocumentId = parse_id(request.id)?;
    let status: DocumentStatus = parse_status(kind, &request.status)?;

    let record: DocumentRecord = tradeflow::update_status(store, tenant, kind, id, status, now)
        .map_err(translate_core_error)?;
    Ok(DocumentInfo::from_record(&record))
}

/// Converts an estimate into a project.
///
/// # Errors
///
/// * `ApiError::ResourceNotFound` if the estimate does not exist
/// * `ApiError::DomainRuleViolation` if the estimate is already closed
/// * the tenant resolution and store errors of the other handlers
pub fn convert_estimate_to_project<S: DocumentStore>(
    store: &mut S,
    caller: Option<&CallerIdentity>,
    request: &ConvertRequest,
    now: OffsetDateTime,
) -> Result<ConversionResponse, ApiError> {
    let tenant: TenantId = tenant_of(store, caller)?;
    let source: DocumentId = parse_id(request.source_id)?;

    let outcome: ConversionOutcome =
        tradeflow::convert_estimate_to_project(store, tenant, source, now)
            .map_err(translate_core_error)?;
    Ok(conversion_response(&outcome))
}

/// Converts a project into a work order.
///
/// # Errors
///
/// * `ApiError::ResourceNotFound` if the project does not exist
/// * `ApiError::DomainRuleViolation` if the project is already closed
/// * the tenant resolution and store errors of the other handlers
pub fn convert_project_to_work_order<S: DocumentStore>(
    store: &mut S,
    caller: Option<&CallerIdentity>,
    request: &ConvertRequest,
    now: OffsetDateTime,
) -> Result<ConversionResponse, ApiError> {
    let tenant: TenantId = tenant_of(store, caller)?;
    let source: DocumentId = parse_id(request.source_id)?;

    let outcome: ConversionOutcome =
        tradeflow::convert_project_to_work_order(store, tenant, source, now)
            .map_err(translate_core_error)?;
    Ok(conversion_response(&outcome))
}

/// Invoices a completed work order.
///
/// # Errors
///
/// * `ApiError::ResourceNotFound` if the work order does not exist
/// * `ApiError::DomainRuleViolation` if the work order is not completed
/// * `ApiError::InvalidInput` if an amount is negative
/// * the tenant resolution and store errors of the other handlers
pub fn convert_work_order_to_invoice<S: DocumentStore>(
    store: &mut S,
    caller: Option<&CallerIdentity>,
    request: &ConvertWorkOrderRequest,
    now: OffsetDateTime,
) -> Result<ConversionResponse, ApiError> {
    let tenant: TenantId = tenant_of(store, caller)?;
    let source: DocumentId = parse_id(request.source_id)?;

    let outcome: ConversionOutcome =
        tradeflow::convert_work_order_to_invoice(store, tenant, source, &request.amounts, now)
            .map_err(translate_core_error)?;
    Ok(conversion_response(&outcome))
}

