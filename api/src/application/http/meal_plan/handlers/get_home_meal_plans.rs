use crate::application::http::meal_plan::handlers::get_meal_plans::GetMealPlansResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantry_core::domain::meal_plan::ports::MealPlanService;

#[utoipa::path(
    get,
    path = "/home",
    tag = "meal-plan",
    summary = "Get active meal plans for the home page",
    responses(
        (status = 200, body = GetMealPlansResponse)
    ),
)]
pub async fn get_home_meal_plans(
    State(state): State<AppState>,
) -> Result<Response<GetMealPlansResponse>, ApiError> {
    let meal_plans = state.service.get_home_meal_plans().await?;

    Ok(Response::OK(GetMealPlansResponse { data: meal_plans }))
}
