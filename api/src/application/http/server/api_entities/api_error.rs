use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantry_core::domain::common::entities::{app_errors::CoreError, field_errors::FieldErrors};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    UnProcessableEntity(FieldErrors),

    #[error("{message}")]
    Conflict {
        message: String,
        current_status: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub message: String,
    #[schema(value_type = Object)]
    pub errors: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConflictResponse {
    pub message: String,
    pub current_status: String,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(errors) => ApiError::UnProcessableEntity(errors),
            CoreError::Conflict {
                message,
                current_status,
            } => ApiError::Conflict {
                message,
                current_status,
            },
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::InvalidToken => ApiError::Unauthorized("Invalid token".to_string()),
            CoreError::TokenExpired => ApiError::Unauthorized("Token expired".to_string()),
            CoreError::InvalidPagination => {
                ApiError::BadRequest("Invalid pagination parameters".to_string())
            }
            CoreError::ObjectStorageError(message) => {
                error!("object storage failure: {}", message);
                ApiError::InternalServerError("Object storage unavailable".to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::UnProcessableEntity(field_errors(&errors))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(error) => {
                let mut fields = FieldErrors::new();
                let (field, message) = data_error_field(&error.body_text());
                fields.add(field, message);
                ApiError::UnProcessableEntity(fields)
            }
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Splits a well-formed body's decoding failure into the offending field
/// path and the decoder message. Root-level failures land on `body`.
fn data_error_field(text: &str) -> (String, String) {
    let detail = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(text);

    if let Some((path, message)) = detail.split_once(": ")
        && !path.is_empty()
        && path != "."
        && !path.contains(char::is_whitespace)
    {
        let field = path.replace('[', ".").replace(']', "");
        return (field, message.to_string());
    }

    ("body".to_string(), detail.to_string())
}

/// Flattens `validator` output into the field error map the API reports.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    collect_validation_errors(&mut fields, None, errors);
    fields
}

/// Flattens nested validator output into dotted field paths (`items.0.quantity`).
fn collect_validation_errors(
    fields: &mut FieldErrors,
    prefix: Option<&str>,
    errors: &ValidationErrors,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("The {} field is invalid.", path));
                    fields.add(path.clone(), message);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_errors(fields, Some(&path), nested);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_validation_errors(fields, Some(&format!("{path}.{index}")), nested);
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::UnProcessableEntity(errors) => {
                let message = errors
                    .first_message()
                    .unwrap_or("The given data was invalid.")
                    .to_string();
                let body = ValidationErrorResponse {
                    message,
                    errors: errors.into_inner(),
                };
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
            }
            ApiError::Conflict {
                message,
                current_status,
            } => {
                let body = ConflictResponse {
                    message,
                    current_status,
                };
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "E_NOT_FOUND", message),
            ApiError::Forbidden(message) => (StatusCode::FORBIDDEN, "E_FORBIDDEN", message),
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED", message)
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST", message),
            ApiError::InternalServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "E_INTERNAL_SERVER_ERROR",
                message,
            ),
        };

        let body = ApiErrorResponse {
            code: code.to_string(),
            message,
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs the `validator` rules of `T`.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value.validate()?;

        Ok(ValidateJson(value))
    }
}

/// JSON body extractor that leaves the `validator` rules to the handler,
/// which reports them together with the domain checks.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use validator::Validate;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Line {
        #[validate(range(min = 1, message = "Quantity must be at least 1."))]
        quantity: i64,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Body {
        #[validate(length(min = 1, message = "Client name is required."))]
        client_name: String,
        #[validate(nested)]
        items: Vec<Line>,
    }

    #[test]
    fn test_nested_errors_use_dotted_paths() {
        let body = Body {
            client_name: String::new(),
            items: vec![Line { quantity: 1 }, Line { quantity: 0 }],
        };

        let Err(errors) = body.validate() else {
            panic!("expected validation errors");
        };
        let ApiError::UnProcessableEntity(fields) = ApiError::from(errors) else {
            panic!("expected unprocessable entity");
        };

        assert_eq!(
            fields.get("client_name"),
            Some(&["Client name is required.".to_string()][..])
        );
        assert!(fields.contains("items.1.quantity"));
    }

    #[test]
    fn test_data_errors_name_the_field_path() {
        let (field, message) = data_error_field(
            "Failed to deserialize the JSON body into the target type: products[0].quantity: \
             invalid type: string \"two\", expected i64 at line 1 column 42",
        );
        assert_eq!(field, "products.0.quantity");
        assert!(message.starts_with("invalid type"));

        let (field, _) = data_error_field(
            "Failed to deserialize the JSON body into the target type: \
             invalid type: integer `1`, expected a map at line 1 column 1",
        );
        assert_eq!(field, "body");
    }

    #[test]
    fn test_core_errors_map_to_api_errors() {
        assert!(matches!(
            ApiError::from(CoreError::TokenExpired),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(CoreError::Forbidden("nope".to_string())),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            ApiError::from(CoreError::invalid_field("days", "required")),
            ApiError::UnProcessableEntity(_)
        ));
    }
}
