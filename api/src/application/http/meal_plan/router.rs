use super::handlers::{
    build_meal_plan::{__path_build_meal_plan, build_meal_plan},
    create_meal_plan::{__path_create_meal_plan, create_meal_plan},
    delete_meal_plan::{__path_delete_meal_plan, delete_meal_plan},
    get_home_meal_plans::{__path_get_home_meal_plans, get_home_meal_plans},
    get_meal_plan::{__path_get_meal_plan, get_meal_plan},
    get_meal_plans::{__path_get_meal_plans, get_meal_plans},
    update_meal_plan::{__path_update_meal_plan, update_meal_plan},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_meal_plans,
    get_home_meal_plans,
    get_meal_plan,
    create_meal_plan,
    update_meal_plan,
    build_meal_plan,
    delete_meal_plan
))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/meal-plans", state.args.server.root_path),
            post(create_meal_plan).get(get_meal_plans),
        )
        .route(
            &format!("{}/meal-plans/home", state.args.server.root_path),
            get(get_home_meal_plans),
        )
        .route(
            &format!("{}/meal-plans/{{meal_plan_id}}", state.args.server.root_path),
            get(get_meal_plan)
                .put(update_meal_plan)
                .delete(delete_meal_plan),
        )
        .route(
            &format!(
                "{}/meal-plans/{{meal_plan_id}}/builder",
                state.args.server.root_path
            ),
            post(build_meal_plan),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
