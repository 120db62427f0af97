use chrono::{TimeZone, Utc};
use sea_orm::ActiveValue::Set;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        order::{entities::Order, value_objects::OrderType},
    },
    entity::orders::{ActiveModel as OrderActiveModel, Model as OrderModel},
};

fn decode<T: DeserializeOwned>(
    order_id: &uuid::Uuid,
    column: &str,
    value: serde_json::Value,
) -> Result<T, CoreError> {
    serde_json::from_value(value).map_err(|e| {
        error!("Order {} has an unreadable {} column: {}", order_id, column, e);
        CoreError::InternalServerError
    })
}

fn encode<T: serde::Serialize>(column: &str, value: &T) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to encode order {}: {}", column, e);
        CoreError::InternalServerError
    })
}

fn parse_order_type(value: &str) -> Option<OrderType> {
    match value {
        "products" => Some(OrderType::Products),
        "meal_plan" => Some(OrderType::MealPlan),
        _ => None,
    }
}

impl TryFrom<OrderModel> for Order {
    type Error = CoreError;

    fn try_from(model: OrderModel) -> Result<Self, Self::Error> {
        let id = model.id;

        let order_type = parse_order_type(&model.order_type).ok_or_else(|| {
            error!("Order {} has unknown order type {}", id, model.order_type);
            CoreError::InternalServerError
        })?;
        let status = model.status.parse().map_err(|e| {
            error!("Order {} has {}", id, e);
            CoreError::InternalServerError
        })?;
        let subscription = model
            .subscription
            .map(|value| decode(&id, "subscription", value))
            .transpose()?;

        Ok(Order {
            id,
            order_type,
            client_info: decode(&id, "client_info", model.client_info)?,
            line_items: decode(&id, "line_items", model.line_items)?,
            subtotal: model.subtotal,
            tax: model.tax,
            total: model.total,
            status,
            status_history: decode(&id, "status_history", model.status_history)?,
            meal_plan_id: model.meal_plan_id,
            subscription,
            validated_at: model.validated_at.map(|dt| dt.and_utc()),
            validated_by: model.validated_by,
            validation_comment: model.validation_comment,
            created_by: model.created_by,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        })
    }
}

impl TryFrom<Order> for OrderActiveModel {
    type Error = CoreError;

    fn try_from(order: Order) -> Result<Self, Self::Error> {
        let subscription = order
            .subscription
            .as_ref()
            .map(|subscription| encode("subscription", subscription))
            .transpose()?;

        Ok(OrderActiveModel {
            id: Set(order.id),
            order_type: Set(order.order_type.as_str().to_string()),
            client_info: Set(encode("client_info", &order.client_info)?),
            client_email: Set(order.client_info.email.clone()),
            line_items: Set(encode("line_items", &order.line_items)?),
            subtotal: Set(order.subtotal),
            tax: Set(order.tax),
            total: Set(order.total),
            status: Set(order.status.as_str().to_string()),
            status_history: Set(encode("status_history", &order.status_history)?),
            meal_plan_id: Set(order.meal_plan_id),
            subscription: Set(subscription),
            validated_at: Set(order.validated_at.map(|dt| dt.naive_utc())),
            validated_by: Set(order.validated_by),
            validation_comment: Set(order.validation_comment),
            created_by: Set(order.created_by),
            created_at: Set(order.created_at.naive_utc()),
            updated_at: Set(order.updated_at.naive_utc()),
        })
    }
}
