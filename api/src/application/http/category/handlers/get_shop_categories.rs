use crate::application::http::category::handlers::get_categories::GetCategoriesResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantry_core::domain::category::ports::CategoryService;

#[utoipa::path(
    get,
    path = "/express-shop",
    tag = "category",
    summary = "Get shop categories",
    description = "Categories that hold at least one active product.",
    responses(
        (status = 200, body = GetCategoriesResponse)
    ),
)]
pub async fn get_shop_categories(
    State(state): State<AppState>,
) -> Result<Response<GetCategoriesResponse>, ApiError> {
    let categories = state.service.get_shop_categories().await?;

    Ok(Response::OK(GetCategoriesResponse { data: categories }))
}
