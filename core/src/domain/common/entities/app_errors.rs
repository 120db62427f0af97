use thiserror::Error;

use super::field_errors::FieldErrors;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("{message}")]
    Conflict {
        message: String,
        current_status: String,
    },

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid pagination parameters")]
    InvalidPagination,

    #[error("Object storage error: {0}")]
    ObjectStorageError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl From<FieldErrors> for CoreError {
    fn from(errors: FieldErrors) -> Self {
        CoreError::Validation(errors)
    }
}

impl CoreError {
    /// Single-field validation failure.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        CoreError::Validation(errors)
    }
}
