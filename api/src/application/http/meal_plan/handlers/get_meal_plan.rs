use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::meal_plan::entities::MealPlan;
use pantry_core::domain::meal_plan::ports::MealPlanService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MealPlanResponse {
    pub data: MealPlan,
}

#[utoipa::path(
    get,
    path = "/{meal_plan_id}",
    tag = "meal-plan",
    summary = "Get meal plan",
    params(
        ("meal_plan_id" = Uuid, Path, description = "Meal plan ID"),
    ),
    responses(
        (status = 200, body = MealPlanResponse),
        (status = 404, description = "Meal plan not found")
    ),
)]
pub async fn get_meal_plan(
    Path(meal_plan_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<MealPlanResponse>, ApiError> {
    let meal_plan = state.service.get_meal_plan(meal_plan_id).await?;

    Ok(Response::OK(MealPlanResponse { data: meal_plan }))
}
