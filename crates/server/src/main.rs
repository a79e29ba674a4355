// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod identity;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info};
use tradeflow_api::{
    AllocateNumberRequest, AllocateNumberResponse, ApiError, ConversionResponse, ConvertRequest,
    ConvertWorkOrderRequest, CreateDocumentRequest, DocumentInfo, GetDocumentRequest,
    NumberingConfigResponse, UpdateNumberingConfigRequest, UpdateStatusRequest, allocate_number,
    convert_estimate_to_project, convert_project_to_work_order, convert_work_order_to_invoice,
    create_document, get_document, get_numbering_config, update_numbering_config, update_status,
};
use tradeflow_persistence::{Persistence, PersistenceError};

use crate::identity::Caller;

/// Tradeflow Server - HTTP server for document numbering and conversions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, conflicts_with = "mysql_url")]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL, used instead of `SQLite`.
    #[arg(long)]
    mysql_url: Option<String>,

    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Create a tenant with this name at startup.
    #[arg(long, requires = "seed_user")]
    seed_tenant: Option<String>,

    /// User id attached to the seeded tenant.
    #[arg(long, requires = "seed_tenant")]
    seed_user: Option<String>,
}

/// Application state shared across handlers.
///
/// The persistence layer is wrapped in a Mutex; every request holds it for
/// the whole operation.
#[derive(Clone)]
pub struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NoTenantContext { .. } => StatusCode::FORBIDDEN,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/numbers/allocate`.
///
/// Hands out the next number without reserving it.
async fn handle_allocate_number(
    AxumState(app_state): AxumState<AppState>,
    caller: Caller,
    Json(req): Json<AllocateNumberRequest>,
) -> Result<Json<AllocateNumberResponse>, HttpError> {
    info!(kind = %req.kind, "Handling allocate_number request");

    let today = OffsetDateTime::now_utc().date();
    let mut persistence = app_state.persistence.lock().await;
    let response: AllocateNumberResponse =
        allocate_number(&mut *persistence, caller.identity(), &req, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/numbering`.
async fn handle_get_numbering_config(
    AxumState(app_state): AxumState<AppState>,
    caller: Caller,
) -> Result<Json<NumberingConfigResponse>, HttpError> {
    info!("Handling get_numbering_config request");

    let mut persistence = app_state.persistence.lock().await;
    let response: NumberingConfigResponse =
        get_numbering_config(&mut *persistence, caller.identity())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/numbering`.
async fn handle_update_numbering_config(
    AxumState(app_state): AxumState<AppState>,
    caller: Caller,
    Json(req): Json<UpdateNumberingConfigRequest>,
) -> Result<Json<NumberingConfigResponse>, HttpError> {
    info!(kind = %req.kind, "Handling update_numbering_config request");

    let mut persistence = app_state.persistence.lock().await;
    let response: NumberingConfigResponse =
        update_numbering_config(&mut *persistence, caller.identity(), &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/documents`.
async fn handle_create_document(
    AxumState(app_state): AxumState<AppState>,
    caller: Caller,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<DocumentInfo>), HttpError> {
    info!(kind = %req.document.kind(), "Handling create_document request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DocumentInfo = create_document(
        &mut *persistence,
        caller.identity(),
        req,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET `/documents/{kind}/{id}`.
async fn handle_get_document(
    AxumState(app_state): AxumState<AppState>,
    Path((kind, id)): Path<(String, i64)>,
    caller: Caller,
) -> Result<Json<DocumentInfo>, HttpError> {
    info!(kind = %kind, id, "Handling get_document request");

    let req: GetDocumentRequest = GetDocumentRequest { kind, id };
    let mut persistence = app_state.persistence.lock().await;
    let response: DocumentInfo = get_document(&mut *persistence, caller.identity(), &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/documents/status`.
async fn handle_update_status(
    AxumState(app_state): AxumState<AppState>,
    caller: Caller,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<DocumentInfo>, HttpError> {
    info!(
        kind = %req.kind,
        id = req.id,
        status = %req.status,
        "Handling update_status request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: DocumentInfo = update_status(
        &mut *persistence,
        caller.identity(),
        &req,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/conversions/estimate-to-project`.
async fn handle_convert_estimate(
    AxumState(app_state): AxumState<AppState>,
    caller: Caller,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConversionResponse>, HttpError> {
    info!(source_id = req.source_id, "Handling estimate_to_project request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ConversionResponse = convert_estimate_to_project(
        &mut *persistence,
        caller.identity(),
        &req,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/conversions/project-to-work-order`.
async fn handle_convert_project(
    AxumState(app_state): AxumState<AppState>,
    caller: Caller,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConversionResponse>, HttpError> {
    info!(source_id = req.source_id, "Handling project_to_work_order request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ConversionResponse = convert_project_to_work_order(
        &mut *persistence,
        caller.identity(),
        &req,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/conversions/work-order-to-invoice`.
async fn handle_convert_work_order(
    AxumState(app_state): AxumState<AppState>,
    caller: Caller,
    Json(req): Json<ConvertWorkOrderRequest>,
) -> Result<Json<ConversionResponse>, HttpError> {
    info!(source_id = req.source_id, "Handling work_order_to_invoice request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ConversionResponse = convert_work_order_to_invoice(
        &mut *persistence,
        caller.identity(),
        &req,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/numbers/allocate", post(handle_allocate_number))
        .route(
            "/numbering",
            get(handle_get_numbering_config).put(handle_update_numbering_config),
        )
        .route("/documents", post(handle_create_document))
        .route("/documents/status", post(handle_update_status))
        .route("/documents/{kind}/{id}", get(handle_get_document))
        .route(
            "/conversions/estimate-to-project",
            post(handle_convert_estimate),
        )
        .route(
            "/conversions/project-to-work-order",
            post(handle_convert_project),
        )
        .route(
            "/conversions/work-order-to-invoice",
            post(handle_convert_work_order),
        )
        .with_state(app_state)
}

/// Opens the store selected on the command line.
fn open_persistence(args: &Args) -> Result<Persistence, PersistenceError> {
    if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        return Persistence::new_with_mysql(url);
    }
    if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        return Persistence::new_with_file(db_path);
    }
    info!("Using in-memory database");
    Persistence::new_in_memory()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Tradeflow Server");

    let mut persistence: Persistence = open_persistence(&args)?;
    persistence.verify_foreign_key_enforcement()?;

    if let (Some(tenant_name), Some(user_id)) = (&args.seed_tenant, &args.seed_user) {
        let tenant = persistence.create_tenant(tenant_name)?;
        persistence.upsert_profile(user_id, Some(tenant))?;
        info!(tenant = %tenant, user_id = %user_id, "Seeded tenant");
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
