use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantry_core::domain::category::entities::Category;
use pantry_core::domain::category::ports::CategoryService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCategoriesResponse {
    pub data: Vec<Category>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "category",
    summary = "Get categories",
    responses(
        (status = 200, body = GetCategoriesResponse)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Response<GetCategoriesResponse>, ApiError> {
    let categories = state.service.get_categories().await?;

    Ok(Response::OK(GetCategoriesResponse { data: categories }))
}
