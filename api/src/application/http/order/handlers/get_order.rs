use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::order::entities::Order;
use pantry_core::domain::order::ports::OrderService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OrderResponse {
    pub data: Order,
}

#[utoipa::path(
    get,
    path = "/{order_id}",
    tag = "order",
    summary = "Get order",
    description = "Visible to admins and to the client who placed the order.",
    security(("bearer" = [])),
    params(
        ("order_id" = Uuid, Path, description = "Order ID"),
    ),
    responses(
        (status = 200, body = OrderResponse),
        (status = 403, description = "Not allowed to view this order"),
        (status = 404, description = "Order not found")
    ),
)]
pub async fn get_order(
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<OrderResponse>, ApiError> {
    let order = state.service.get_order(identity, order_id).await?;

    Ok(Response::OK(OrderResponse { data: order }))
}
