use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::category::entities::Category;
use pantry_core::domain::category::ports::CategoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryResponse {
    pub data: Category,
}

#[utoipa::path(
    get,
    path = "/{category_id}",
    tag = "category",
    summary = "Get category",
    params(
        ("category_id" = Uuid, Path, description = "Category ID"),
    ),
    responses(
        (status = 200, body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
)]
pub async fn get_category(
    Path(category_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<CategoryResponse>, ApiError> {
    let category = state.service.get_category(category_id).await?;

    Ok(Response::OK(CategoryResponse { data: category }))
}
