use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use pantry_core::domain::{
    authentication::{
        entities::AuthorizeRequestInput, ports::AuthService, value_objects::Identity,
    },
    common::entities::app_errors::CoreError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Token not found")]
    TokenNotFound,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::InvalidToken => "Invalid token",
            AuthError::TokenExpired => "Token expired",
            AuthError::TokenNotFound => "Token not found",
        };
        let status = StatusCode::UNAUTHORIZED;

        let error_response = ErrorResponse {
            code: "E_UNAUTHORIZED".to_string(),
            message: message.to_string(),
            status: status.as_u16() as i64,
        };

        (status, axum::Json(error_response)).into_response()
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    Ok(bearer.token().to_string())
}

/// Resolves the bearer token, when one is sent, into an [`Identity`] request extension.
///
/// Requests without a token pass through untouched; a token that fails
/// verification is rejected here.
pub async fn auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let (mut parts, body) = req.into_parts();

    let token = match extract_token_from_bearer(&mut parts).await {
        Ok(token) => Some(token),
        Err(AuthError::TokenNotFound) => None,
        Err(e) => return Err(e),
    };

    if let Some(token) = token {
        let output = state
            .service
            .authorize_request(AuthorizeRequestInput { token })
            .await
            .map_err(|e| match e {
                CoreError::TokenExpired => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        parts.extensions.insert(output.identity);
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Extractor for handlers that need an authenticated caller.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}
