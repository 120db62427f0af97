use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use pantry_core::domain::product::entities::Product;
use pantry_core::domain::product::ports::ProductService;
use pantry_core::domain::product::value_objects::{ShopPage, ShopProductsFilter};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ShopProductsQuery {
    /// Matched against name, description and sku.
    pub search: Option<String>,
    /// Category name; `all` lists every category.
    pub category: Option<String>,
    pub offset: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/express-shop",
    tag = "product",
    summary = "Get shop products",
    description = "Active products, eight per page, with pagination metadata.",
    params(ShopProductsQuery),
    responses(
        (status = 200, body = ShopPage<Product>)
    ),
)]
pub async fn get_shop_products(
    Query(query): Query<ShopProductsQuery>,
    State(state): State<AppState>,
) -> Result<Response<ShopPage<Product>>, ApiError> {
    let page = state
        .service
        .get_shop_products(ShopProductsFilter {
            search: query.search,
            category: query.category,
            offset: query.offset.unwrap_or(0),
        })
        .await?;

    Ok(Response::OK(page))
}
