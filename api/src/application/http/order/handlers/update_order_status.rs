use crate::application::auth::RequiredIdentity;
use crate::application::http::order::handlers::get_order::OrderResponse;
use crate::application::http::order::validators::UpdateOrderStatusValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::common::entities::app_errors::CoreError;
use pantry_core::domain::order::ports::OrderService;
use pantry_core::domain::order::status::OrderStatus;
use pantry_core::domain::order::value_objects::UpdateOrderStatusInput;
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/{order_id}/status",
    tag = "order",
    summary = "Update order status",
    description = "Moves the order along a declared transition and appends a history entry.",
    security(("bearer" = [])),
    params(
        ("order_id" = Uuid, Path, description = "Order ID"),
    ),
    responses(
        (status = 200, body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 422, description = "Unknown status or undeclared transition")
    ),
    request_body = UpdateOrderStatusValidator
)]
pub async fn update_order_status(
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateOrderStatusValidator>,
) -> Result<Response<OrderResponse>, ApiError> {
    let status: OrderStatus = payload
        .status
        .parse()
        .map_err(|message: String| CoreError::invalid_field("Status", message))?;

    let order = state
        .service
        .update_order_status(
            identity,
            UpdateOrderStatusInput {
                order_id,
                status,
                comment: payload.comment,
            },
        )
        .await?;

    Ok(Response::OK(OrderResponse { data: order }))
}
