use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::meal_plan::ports::MealPlanService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteMealPlanResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{meal_plan_id}",
    tag = "meal-plan",
    summary = "Delete meal plan",
    security(("bearer" = [])),
    params(
        ("meal_plan_id" = Uuid, Path, description = "Meal plan ID"),
    ),
    responses(
        (status = 200, body = DeleteMealPlanResponse)
    ),
)]
pub async fn delete_meal_plan(
    Path(meal_plan_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteMealPlanResponse>, ApiError> {
    state
        .service
        .delete_meal_plan(identity, meal_plan_id)
        .await?;

    Ok(Response::OK(DeleteMealPlanResponse {
        message: "Meal plan deleted successfully".to_string(),
    }))
}
