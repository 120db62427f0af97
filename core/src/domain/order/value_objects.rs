use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::field_errors::FieldErrors, value_objects::OffsetLimit},
    meal_plan::value_objects::MealType,
    order::status::OrderStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Products,
    MealPlan,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Products => "products",
            OrderType::MealPlan => "meal_plan",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductLine {
    pub product_id: Uuid,
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeliveryAddress {
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionPreferences {
    pub meals: Vec<MealType>,
}

impl Default for SubscriptionPreferences {
    fn default() -> Self {
        Self {
            meals: MealType::DEFAULT_PREFERENCES.to_vec(),
        }
    }
}

impl SubscriptionPreferences {
    /// Requested meal types without duplicates, in canonical order.
    pub fn meal_types(&self) -> BTreeSet<MealType> {
        self.meals.iter().copied().collect()
    }
}

/// The meal chosen for each meal type on one delivery day. `None` marks an
/// explicitly empty slot.
pub type MenuSelection = BTreeMap<MealType, Option<Uuid>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub meal_plan_id: Uuid,
    pub delivery_days: Vec<NaiveDate>,
    pub menu_selections: BTreeMap<NaiveDate, MenuSelection>,
    pub preferences: SubscriptionPreferences,
    pub delivery_address: DeliveryAddress,
    /// Total the client displayed at checkout; cross-checked, never trusted.
    pub total_price: Option<Decimal>,
}

impl SubscriptionRequest {
    pub fn unique_delivery_days(&self) -> BTreeSet<NaiveDate> {
        self.delivery_days.iter().copied().collect()
    }
}

/// A checkout request, classified by what is being bought.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRequest {
    Products { items: Vec<ProductLine> },
    /// Legacy flow: a plan for a number of days, priced on breakfast, lunch and dinner.
    MealPlan { meal_plan_id: Uuid, days: u32 },
    Subscription(SubscriptionRequest),
}

impl OrderRequest {
    pub fn order_type(&self) -> OrderType {
        match self {
            OrderRequest::Products { .. } => OrderType::Products,
            OrderRequest::MealPlan { .. } | OrderRequest::Subscription(_) => OrderType::MealPlan,
        }
    }

    pub fn product_ids(&self) -> Vec<Uuid> {
        match self {
            OrderRequest::Products { items } => items
                .iter()
                .map(|line| line.product_id)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn meal_plan_id(&self) -> Option<Uuid> {
        match self {
            OrderRequest::Products { .. } => None,
            OrderRequest::MealPlan { meal_plan_id, .. } => Some(*meal_plan_id),
            OrderRequest::Subscription(subscription) => Some(subscription.meal_plan_id),
        }
    }

    /// Every meal id referenced by a menu selection.
    pub fn meal_ids(&self) -> Vec<Uuid> {
        match self {
            OrderRequest::Subscription(subscription) => subscription
                .menu_selections
                .values()
                .flat_map(|selection| selection.values().flatten().copied())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// The checkout body as received, before its shape is classified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub products: Option<Vec<ProductLine>>,
    pub meal_plan_id: Option<Uuid>,
    pub days: Option<i64>,
    pub delivery_days: Option<Vec<NaiveDate>>,
    pub menu_selections: Option<BTreeMap<NaiveDate, MenuSelection>>,
    pub preferences: Option<SubscriptionPreferences>,
    pub delivery_address: Option<DeliveryAddress>,
    pub total_price: Option<Decimal>,
}

#[derive(Debug, Clone)]
pub struct CreateOrderInput {
    pub client_info: ClientInfo,
    pub draft: OrderDraft,
    /// Failures already found while decoding the body; reported together
    /// with the order checks.
    pub body_errors: FieldErrors,
}

#[derive(Debug, Clone)]
pub struct UpdateOrderStatusInput {
    pub order_id: Uuid,
    pub status: OrderStatus,
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct ValidateOrderInput {
    pub order_id: Uuid,
    pub comment: String,
}

#[derive(Debug, Clone, Default)]
pub struct GetOrdersFilter {
    pub status: Option<OrderStatus>,
    pub client_email: Option<String>,
    pub page: OffsetLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referenced_ids_are_deduplicated() {
        let product = Uuid::new_v4();
        let request = OrderRequest::Products {
            items: vec![
                ProductLine {
                    product_id: product,
                    quantity: 1,
                },
                ProductLine {
                    product_id: product,
                    quantity: 3,
                },
            ],
        };

        assert_eq!(request.product_ids(), vec![product]);
        assert_eq!(request.meal_plan_id(), None);
        assert_eq!(request.order_type(), OrderType::Products);
    }

    #[test]
    fn test_subscription_meal_ids_skip_empty_slots() {
        let meal = Uuid::new_v4();
        let day = NaiveDate::from_ymd_opt(2030, 1, 2).unwrap();
        let mut selection = MenuSelection::new();
        selection.insert(MealType::Breakfast, Some(meal));
        selection.insert(MealType::Lunch, None);
        selection.insert(MealType::Dinner, Some(meal));

        let request = OrderRequest::Subscription(SubscriptionRequest {
            meal_plan_id: Uuid::new_v4(),
            delivery_days: vec![day],
            menu_selections: BTreeMap::from([(day, selection)]),
            preferences: SubscriptionPreferences::default(),
            delivery_address: DeliveryAddress::default(),
            total_price: None,
        });

        assert_eq!(request.meal_ids(), vec![meal]);
        assert_eq!(request.order_type(), OrderType::MealPlan);
    }

    #[test]
    fn test_default_preferences() {
        let preferences = SubscriptionPreferences::default();
        assert_eq!(
            preferences.meal_types().into_iter().collect::<Vec<_>>(),
            vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner]
        );
    }
}
