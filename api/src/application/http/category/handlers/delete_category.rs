use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::category::ports::CategoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCategoryResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{category_id}",
    tag = "category",
    summary = "Delete category",
    description = "Soft deletes a category.",
    security(("bearer" = [])),
    params(
        ("category_id" = Uuid, Path, description = "Category ID"),
    ),
    responses(
        (status = 200, body = DeleteCategoryResponse)
    ),
)]
pub async fn delete_category(
    Path(category_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteCategoryResponse>, ApiError> {
    state.service.delete_category(identity, category_id).await?;

    Ok(Response::OK(DeleteCategoryResponse {
        message: "Category deleted successfully".to_string(),
    }))
}
