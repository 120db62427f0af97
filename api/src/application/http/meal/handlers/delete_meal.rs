use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::meal::ports::MealService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteMealResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{meal_id}",
    tag = "meal",
    summary = "Delete meal",
    security(("bearer" = [])),
    params(
        ("meal_id" = Uuid, Path, description = "Meal ID"),
    ),
    responses(
        (status = 200, body = DeleteMealResponse)
    ),
)]
pub async fn delete_meal(
    Path(meal_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteMealResponse>, ApiError> {
    state.service.delete_meal(identity, meal_id).await?;

    Ok(Response::OK(DeleteMealResponse {
        message: "Meal deleted successfully".to_string(),
    }))
}
