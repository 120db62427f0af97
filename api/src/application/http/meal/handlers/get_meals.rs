use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use pantry_core::domain::meal::entities::Meal;
use pantry_core::domain::meal::ports::MealService;
use pantry_core::domain::meal::value_objects::{GetMealsFilter, MealStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetMealsQuery {
    pub status: Option<MealStatus>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMealsResponse {
    pub data: Vec<Meal>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "meal",
    summary = "Get meals",
    params(GetMealsQuery),
    responses(
        (status = 200, body = GetMealsResponse)
    ),
)]
pub async fn get_meals(
    Query(query): Query<GetMealsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetMealsResponse>, ApiError> {
    let meals = state
        .service
        .get_meals(GetMealsFilter {
            status: query.status,
        })
        .await?;

    Ok(Response::OK(GetMealsResponse { data: meals }))
}
