use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantry_core::domain::meal_plan::entities::MealPlan;
use pantry_core::domain::meal_plan::ports::MealPlanService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMealPlansResponse {
    pub data: Vec<MealPlan>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "meal-plan",
    summary = "Get meal plans",
    responses(
        (status = 200, body = GetMealPlansResponse)
    ),
)]
pub async fn get_meal_plans(
    State(state): State<AppState>,
) -> Result<Response<GetMealPlansResponse>, ApiError> {
    let meal_plans = state.service.get_meal_plans().await?;

    Ok(Response::OK(GetMealPlansResponse { data: meal_plans }))
}
