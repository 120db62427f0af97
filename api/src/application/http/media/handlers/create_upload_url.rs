use crate::application::auth::RequiredIdentity;
use crate::application::http::media::validators::CreateUploadUrlValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantry_core::domain::media::entities::MediaUpload;
use pantry_core::domain::media::ports::MediaService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateUploadUrlResponse {
    pub data: MediaUpload,
}

#[utoipa::path(
    post,
    path = "/media/upload",
    tag = "media",
    summary = "Create a presigned upload URL",
    description = "The returned URL accepts a single PUT with the given content type and expires after five minutes.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = CreateUploadUrlResponse)
    ),
    request_body = CreateUploadUrlValidator
)]
pub async fn create_upload_url(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateUploadUrlValidator>,
) -> Result<Response<CreateUploadUrlResponse>, ApiError> {
    let upload = state
        .service
        .create_upload_url(identity, payload.into())
        .await?;

    Ok(Response::OK(CreateUploadUrlResponse { data: upload }))
}
