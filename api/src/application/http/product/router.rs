use super::handlers::{
    create_product::{__path_create_product, create_product},
    delete_product::{__path_delete_product, delete_product},
    get_home_products::{__path_get_home_products, get_home_products},
    get_product::{__path_get_product, get_product},
    get_products::{__path_get_products, get_products},
    get_shop_products::{__path_get_shop_products, get_shop_products},
    update_product::{__path_update_product, update_product},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_products,
    get_product,
    get_home_products,
    get_shop_products,
    create_product,
    update_product,
    delete_product
))]
pub struct ProductApiDoc;

pub fn product_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/products"),
            post(create_product).get(get_products),
        )
        .route(&format!("{root_path}/products/home"), get(get_home_products))
        .route(
            &format!("{root_path}/products/express-shop"),
            get(get_shop_products),
        )
        .route(
            &format!("{root_path}/products/{{product_id}}"),
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
