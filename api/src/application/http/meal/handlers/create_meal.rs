use crate::application::auth::RequiredIdentity;
use crate::application::http::meal::handlers::get_meal::MealResponse;
use crate::application::http::meal::validators::CreateMealValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantry_core::domain::meal::ports::MealService;

#[utoipa::path(
    post,
    path = "",
    tag = "meal",
    summary = "Create meal",
    description = "New meals are always active.",
    security(("bearer" = [])),
    responses(
        (status = 201, body = MealResponse)
    ),
    request_body = CreateMealValidator
)]
pub async fn create_meal(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateMealValidator>,
) -> Result<Response<MealResponse>, ApiError> {
    let meal = state.service.create_meal(identity, payload.into()).await?;

    Ok(Response::Created(MealResponse { data: meal }))
}
