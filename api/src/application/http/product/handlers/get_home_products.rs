use crate::application::http::product::handlers::get_products::GetProductsResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantry_core::domain::product::ports::ProductService;

#[utoipa::path(
    get,
    path = "/home",
    tag = "product",
    summary = "Get home page products",
    description = "The latest active products shown on the home page.",
    responses(
        (status = 200, body = GetProductsResponse)
    ),
)]
pub async fn get_home_products(
    State(state): State<AppState>,
) -> Result<Response<GetProductsResponse>, ApiError> {
    let products = state.service.get_home_products().await?;

    Ok(Response::OK(GetProductsResponse { data: products }))
}
