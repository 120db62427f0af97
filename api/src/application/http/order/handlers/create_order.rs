use crate::application::auth::RequiredIdentity;
use crate::application::http::order::validators::CreateOrderValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, JsonBody, field_errors,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantry_core::domain::order::entities::Order;
use pantry_core::domain::order::ports::OrderService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateOrderResponse {
    pub message: String,
    pub data: Order,
}

#[utoipa::path(
    post,
    path = "",
    tag = "order",
    summary = "Create order",
    description = "Validates the checkout body, prices it against the catalog and stores a pending order.",
    security(("bearer" = [])),
    responses(
        (status = 201, body = CreateOrderResponse),
        (status = 422, description = "Invalid checkout body")
    ),
    request_body = CreateOrderValidator
)]
pub async fn create_order(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    JsonBody(payload): JsonBody<CreateOrderValidator>,
) -> Result<Response<CreateOrderResponse>, ApiError> {
    let body_errors = payload
        .validate()
        .err()
        .map(|errors| field_errors(&errors))
        .unwrap_or_default();

    let order = state
        .service
        .create_order(identity, payload.into_input(body_errors))
        .await?;

    Ok(Response::Created(CreateOrderResponse {
        message: "Order created successfully".to_string(),
        data: order,
    }))
}
