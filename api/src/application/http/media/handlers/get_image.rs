use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use pantry_core::domain::media::ports::MediaService;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[utoipa::path(
    get,
    path = "/images/{path}",
    tag = "media",
    summary = "Get an uploaded image",
    security(("bearer" = [])),
    params(
        ("path" = String, Path, description = "Object path inside the bucket"),
    ),
    responses(
        (status = 200, description = "Raw image bytes", content_type = "application/octet-stream"),
        (status = 404, description = "Image not found")
    ),
)]
pub async fn get_image(
    Path(path): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<impl IntoResponse, ApiError> {
    let image = state.service.get_image(identity, path).await?;
    let content_type = image
        .content_type
        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

    Ok(([(CONTENT_TYPE, content_type)], image.body))
}
