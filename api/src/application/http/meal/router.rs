use super::handlers::{
    create_meal::{__path_create_meal, create_meal},
    delete_meal::{__path_delete_meal, delete_meal},
    get_meal::{__path_get_meal, get_meal},
    get_meals::{__path_get_meals, get_meals},
    update_meal::{__path_update_meal, update_meal},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_meals, get_meal, create_meal, update_meal, delete_meal))]
pub struct MealApiDoc;

pub fn meal_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/meals", state.args.server.root_path),
            post(create_meal).get(get_meals),
        )
        .route(
            &format!("{}/meals/{{meal_id}}", state.args.server.root_path),
            get(get_meal).put(update_meal).delete(delete_meal),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
