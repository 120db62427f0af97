use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use pantry_core::domain::common::entities::app_errors::CoreError;
use pantry_core::domain::common::value_objects::{OffsetLimit, PageInfo};
use pantry_core::domain::order::entities::Order;
use pantry_core::domain::order::ports::OrderService;
use pantry_core::domain::order::status::OrderStatus;
use pantry_core::domain::order::value_objects::GetOrdersFilter;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetOrdersQuery {
    pub status: Option<String>,
    pub client_email: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetOrdersResponse {
    pub data: Vec<Order>,
    pub pagination: PageInfo,
}

#[utoipa::path(
    get,
    path = "",
    tag = "order",
    summary = "Get orders",
    description = "Newest first. Admin only.",
    security(("bearer" = [])),
    params(GetOrdersQuery),
    responses(
        (status = 200, body = GetOrdersResponse),
        (status = 403, description = "Admin role required")
    ),
)]
pub async fn get_orders(
    Query(query): Query<GetOrdersQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetOrdersResponse>, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<OrderStatus>)
        .transpose()
        .map_err(|message| CoreError::invalid_field("status", message))?;

    let defaults = OffsetLimit::default();
    let page = OffsetLimit::new(
        query.offset.unwrap_or(defaults.offset),
        query.limit.unwrap_or(defaults.limit),
    );

    let orders = state
        .service
        .get_orders(
            identity,
            GetOrdersFilter {
                status,
                client_email: query.client_email,
                page,
            },
        )
        .await?;

    Ok(Response::OK(GetOrdersResponse {
        pagination: PageInfo::new(orders.count, orders.offset, orders.limit),
        data: orders.items,
    }))
}
