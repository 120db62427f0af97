use pantry_core::domain::media::value_objects::CreateUploadUrlInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUploadUrlValidator {
    #[validate(length(min = 1, max = 255, message = "The content type is required."))]
    pub content_type: String,

    #[validate(length(min = 1, max = 255, message = "The file name is required."))]
    pub filename: String,
}

impl From<CreateUploadUrlValidator> for CreateUploadUrlInput {
    fn from(payload: CreateUploadUrlValidator) -> Self {
        CreateUploadUrlInput {
            content_type: payload.content_type,
            filename: payload.filename,
        }
    }
}
