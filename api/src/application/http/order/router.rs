use super::handlers::{
    create_order::{__path_create_order, create_order},
    get_order::{__path_get_order, get_order},
    get_orders::{__path_get_orders, get_orders},
    update_order_status::{__path_update_order_status, update_order_status},
    validate_order::{__path_validate_order, validate_order},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_order,
    get_orders,
    get_order,
    update_order_status,
    validate_order
))]
pub struct OrderApiDoc;

pub fn order_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/orders", state.args.server.root_path),
            post(create_order).get(get_orders),
        )
        .route(
            &format!("{}/orders/{{order_id}}", state.args.server.root_path),
            get(get_order),
        )
        .route(
            &format!("{}/orders/{{order_id}}/status", state.args.server.root_path),
            put(update_order_status),
        )
        .route(
            &format!("{}/orders/{{order_id}}/validate", state.args.server.root_path),
            post(validate_order),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
