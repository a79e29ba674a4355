// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity extraction.
//!
//! Authentication happens upstream. The proxy in front of this server
//! forwards the authenticated user id in the `x-user-id` header; a request
//! without it is handled as anonymous and rejected by the API layer.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};
use tradeflow_api::CallerIdentity;

use crate::AppState;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The caller of a request, if one was identified.
pub struct Caller(pub Option<CallerIdentity>);

impl Caller {
    pub const fn identity(&self) -> Option<&CallerIdentity> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = IdentityError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            debug!("Request carries no caller identity");
            return Ok(Self(None));
        };

        let user_id: &str = value.to_str().map_err(|_| {
            warn!("Invalid {USER_ID_HEADER} header encoding");
            IdentityError::InvalidHeader
        })?;
        let user_id: &str = user_id.trim();
        if user_id.is_empty() {
            warn!("Empty {USER_ID_HEADER} header");
            return Err(IdentityError::InvalidHeader);
        }

        Ok(Self(Some(CallerIdentity::new(user_id))))
    }
}

#[derive(Debug)]
pub enum IdentityError {
    /// The identity header is present but unusable.
    InvalidHeader,
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidHeader => (
                StatusCode::UNAUTHORIZED,
                format!("Invalid {USER_ID_HEADER} header"),
            )
                .into_response(),
        }
    }
}
