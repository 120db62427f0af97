use crate::application::auth::RequiredIdentity;
use crate::application::http::meal_plan::handlers::get_meal_plan::MealPlanResponse;
use crate::application::http::meal_plan::validators::BuildMealPlanValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::meal_plan::ports::MealPlanService;
use pantry_core::domain::meal_plan::value_objects::BuildMealPlanInput;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/{meal_plan_id}/builder",
    tag = "meal-plan",
    summary = "Set the meals offered by a meal plan",
    description = "Replaces the breakfast, lunch and dinner menus and activates the plan. Every meal id must exist.",
    security(("bearer" = [])),
    params(
        ("meal_plan_id" = Uuid, Path, description = "Meal plan ID"),
    ),
    responses(
        (status = 200, body = MealPlanResponse),
        (status = 404, description = "Meal plan not found"),
        (status = 422, description = "Unknown meal ids")
    ),
    request_body = BuildMealPlanValidator
)]
pub async fn build_meal_plan(
    Path(meal_plan_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<BuildMealPlanValidator>,
) -> Result<Response<MealPlanResponse>, ApiError> {
    let meal_plan = state
        .service
        .build_meal_plan(
            identity,
            BuildMealPlanInput {
                meal_plan_id,
                menu: payload.meals,
            },
        )
        .await?;

    Ok(Response::OK(MealPlanResponse { data: meal_plan }))
}
