use std::collections::BTreeMap;

use chrono::NaiveDate;
use pantry_core::domain::{
    common::entities::field_errors::FieldErrors,
    order::value_objects::{
        ClientInfo, CreateOrderInput, DeliveryAddress, MenuSelection, OrderDraft, ProductLine,
        SubscriptionPreferences,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Checkout body. Exactly one of `products` or `meal_plan_id` must be set;
/// the schedule fields only apply to meal plan subscriptions.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderValidator {
    #[serde(default)]
    #[validate(
        required(message = "Client name is required."),
        length(min = 1, max = 255, message = "Client name is required.")
    )]
    pub client_name: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Please provide a valid email address."),
        email(message = "Please provide a valid email address."),
        length(max = 255, message = "The email may not exceed 255 characters.")
    )]
    pub client_email: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "Client phone is required."),
        length(min = 1, max = 20, message = "Client phone is required.")
    )]
    pub client_phone: Option<String>,

    #[serde(default)]
    pub products: Option<Vec<ProductLine>>,

    #[serde(default)]
    pub meal_plan_id: Option<Uuid>,

    #[serde(default)]
    pub days: Option<i64>,

    #[serde(default)]
    pub delivery_days: Option<Vec<NaiveDate>>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub menu_selections: Option<BTreeMap<NaiveDate, MenuSelection>>,

    #[serde(default)]
    pub preferences: Option<SubscriptionPreferences>,

    #[serde(default)]
    pub delivery_address: Option<DeliveryAddress>,

    #[serde(default)]
    pub total_price: Option<Decimal>,
}

impl CreateOrderValidator {
    /// Hands the body to the order service along with the failures of its own
    /// rules, so both are reported in one response.
    pub fn into_input(self, body_errors: FieldErrors) -> CreateOrderInput {
        CreateOrderInput {
            client_info: ClientInfo {
                name: self.client_name.unwrap_or_default(),
                email: self.client_email.unwrap_or_default(),
                phone: self.client_phone.unwrap_or_default(),
            },
            draft: OrderDraft {
                products: self.products,
                meal_plan_id: self.meal_plan_id,
                days: self.days,
                delivery_days: self.delivery_days,
                menu_selections: self.menu_selections,
                preferences: self.preferences,
                delivery_address: self.delivery_address,
                total_price: self.total_price,
            },
            body_errors,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusValidator {
    #[serde(rename = "Status")]
    #[validate(length(min = 1, message = "The status is required."))]
    pub status: String,

    #[serde(rename = "Comment")]
    #[validate(length(min = 1, max = 1000, message = "A comment is required."))]
    pub comment: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ValidateOrderValidator {
    #[validate(length(min = 1, max = 250, message = "A validation comment is required."))]
    pub comment: String,
}
