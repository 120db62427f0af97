use crate::application::auth::RequiredIdentity;
use crate::application::http::meal_plan::handlers::get_meal_plan::MealPlanResponse;
use crate::application::http::meal_plan::validators::MealPlanValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::meal_plan::ports::MealPlanService;
use pantry_core::domain::meal_plan::value_objects::UpdateMealPlanInput;
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/{meal_plan_id}",
    tag = "meal-plan",
    summary = "Update meal plan",
    security(("bearer" = [])),
    params(
        ("meal_plan_id" = Uuid, Path, description = "Meal plan ID"),
    ),
    responses(
        (status = 200, body = MealPlanResponse),
        (status = 404, description = "Meal plan not found")
    ),
    request_body = MealPlanValidator
)]
pub async fn update_meal_plan(
    Path(meal_plan_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<MealPlanValidator>,
) -> Result<Response<MealPlanResponse>, ApiError> {
    let meal_plan = state
        .service
        .update_meal_plan(
            identity,
            UpdateMealPlanInput {
                meal_plan_id,
                attributes: payload.into(),
            },
        )
        .await?;

    Ok(Response::OK(MealPlanResponse { data: meal_plan }))
}
