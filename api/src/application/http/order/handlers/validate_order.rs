use crate::application::auth::RequiredIdentity;
use crate::application::http::order::handlers::get_order::OrderResponse;
use crate::application::http::order::validators::ValidateOrderValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::order::ports::OrderService;
use pantry_core::domain::order::value_objects::ValidateOrderInput;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/{order_id}/validate",
    tag = "order",
    summary = "Validate order",
    description = "Pending orders only. Records who validated the order and why.",
    security(("bearer" = [])),
    params(
        ("order_id" = Uuid, Path, description = "Order ID"),
    ),
    responses(
        (status = 200, body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 422, description = "Order is not pending")
    ),
    request_body = ValidateOrderValidator
)]
pub async fn validate_order(
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ValidateOrderValidator>,
) -> Result<Response<OrderResponse>, ApiError> {
    let order = state
        .service
        .validate_order(
            identity,
            ValidateOrderInput {
                order_id,
                comment: payload.comment,
            },
        )
        .await?;

    Ok(Response::OK(OrderResponse { data: order }))
}
