use crate::application::auth::RequiredIdentity;
use crate::application::http::meal::handlers::get_meal::MealResponse;
use crate::application::http::meal::validators::UpdateMealValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::meal::ports::MealService;
use pantry_core::domain::meal::value_objects::UpdateMealInput;
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/{meal_id}",
    tag = "meal",
    summary = "Update meal",
    security(("bearer" = [])),
    params(
        ("meal_id" = Uuid, Path, description = "Meal ID"),
    ),
    responses(
        (status = 200, body = MealResponse),
        (status = 404, description = "Meal not found")
    ),
    request_body = UpdateMealValidator
)]
pub async fn update_meal(
    Path(meal_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateMealValidator>,
) -> Result<Response<MealResponse>, ApiError> {
    let meal = state
        .service
        .update_meal(
            identity,
            UpdateMealInput {
                meal_id,
                attributes: payload.meal.into(),
                status: payload.status,
            },
        )
        .await?;

    Ok(Response::OK(MealResponse { data: meal }))
}
