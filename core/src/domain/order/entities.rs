use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, generate_timestamp},
    meal_plan::value_objects::MealType,
    order::{
        pricing::PricedOrder,
        status::OrderStatus,
        value_objects::{
            ClientInfo, DeliveryAddress, OrderType, SubscriptionPreferences,
        },
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductLineItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub product_sku: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriceBreakdown {
    pub breakfast: Decimal,
    pub lunch: Decimal,
    pub dinner: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealPlanLineItem {
    pub meal_plan_id: Uuid,
    pub meal_plan_name: String,
    pub meal_plan_sku: String,
    pub days: u32,
    pub daily_price: Decimal,
    pub price_breakdown: PriceBreakdown,
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionLineItem {
    pub meal_plan_id: Uuid,
    pub meal_plan_name: String,
    pub meal_plan_sku: String,
    pub delivery_days: u32,
    pub daily_price: Decimal,
    pub price_breakdown: BTreeMap<MealType, Decimal>,
    pub subtotal: Decimal,
}

/// One priced entry of an order, snapshotting catalog data at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineItem {
    Product(ProductLineItem),
    MealPlan(MealPlanLineItem),
    MealPlanSubscription(SubscriptionLineItem),
}

impl LineItem {
    pub fn subtotal(&self) -> Decimal {
        match self {
            LineItem::Product(item) => item.subtotal,
            LineItem::MealPlan(item) => item.subtotal,
            LineItem::MealPlanSubscription(item) => item.subtotal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusHistoryEntry {
    pub old_status: OrderStatus,
    pub new_status: OrderStatus,
    pub comment: String,
    pub updated_by_user_id: Uuid,
    pub updated_by_user_name: String,
    pub updated_at: DateTime<Utc>,
}

/// Delivery schedule of a subscription order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Subscription {
    pub delivery_days: Vec<NaiveDate>,
    pub menu_selections: BTreeMap<NaiveDate, BTreeMap<MealType, Option<Uuid>>>,
    pub preferences: SubscriptionPreferences,
    pub delivery_address: DeliveryAddress,
    pub quoted_total: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub order_type: OrderType,
    pub client_info: ClientInfo,
    pub line_items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub status_history: Vec<StatusHistoryEntry>,
    pub meal_plan_id: Option<Uuid>,
    pub subscription: Option<Subscription>,
    pub validated_at: Option<DateTime<Utc>>,
    pub validated_by: Option<Uuid>,
    pub validation_comment: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        client_info: ClientInfo,
        priced: PricedOrder,
        subscription: Option<Subscription>,
        created_by: Uuid,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            order_type: priced.order_type,
            client_info,
            line_items: priced.line_items,
            subtotal: priced.subtotal,
            tax: priced.tax,
            total: priced.total,
            status: OrderStatus::Pending,
            status_history: Vec::new(),
            meal_plan_id: priced.meal_plan_id,
            subscription,
            validated_at: None,
            validated_by: None,
            validation_comment: None,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves to `next` and appends one history entry. Undeclared transitions
    /// leave the order untouched.
    pub fn transition(
        &mut self,
        next: OrderStatus,
        comment: String,
        actor: &Identity,
    ) -> Result<(), CoreError> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::Conflict {
                message: format!("Cannot change order status from {} to {}.", self.status, next),
                current_status: self.status.to_string(),
            });
        }

        let now = Utc::now();
        self.status_history.push(StatusHistoryEntry {
            old_status: self.status,
            new_status: next,
            comment,
            updated_by_user_id: actor.id(),
            updated_by_user_name: actor.name().to_string(),
            updated_at: now,
        });
        self.status = next;
        self.updated_at = now;

        Ok(())
    }

    /// Admin review of a pending order. Only `Pending` orders can be validated.
    pub fn validate(&mut self, comment: String, actor: &Identity) -> Result<(), CoreError> {
        if self.status != OrderStatus::Pending {
            return Err(CoreError::Conflict {
                message: "Only pending orders can be validated.".to_string(),
                current_status: self.status.to_string(),
            });
        }

        self.transition(OrderStatus::Validated, comment.clone(), actor)?;
        self.validated_at = Some(self.updated_at);
        self.validated_by = Some(actor.id());
        self.validation_comment = Some(comment);

        Ok(())
    }
}
