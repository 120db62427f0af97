use crate::application::auth::RequiredIdentity;
use crate::application::http::meal_plan::handlers::get_meal_plan::MealPlanResponse;
use crate::application::http::meal_plan::validators::MealPlanValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantry_core::domain::meal_plan::ports::MealPlanService;

#[utoipa::path(
    post,
    path = "",
    tag = "meal-plan",
    summary = "Create meal plan",
    description = "Creates an inactive meal plan with an empty menu; the builder activates it. Names and SKUs are unique.",
    security(("bearer" = [])),
    responses(
        (status = 201, body = MealPlanResponse)
    ),
    request_body = MealPlanValidator
)]
pub async fn create_meal_plan(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<MealPlanValidator>,
) -> Result<Response<MealPlanResponse>, ApiError> {
    let meal_plan = state
        .service
        .create_meal_plan(identity, payload.into())
        .await?;

    Ok(Response::Created(MealPlanResponse { data: meal_plan }))
}
