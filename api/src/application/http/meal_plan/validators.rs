use pantry_core::domain::meal_plan::value_objects::{
    MealPlanAttributes, MealPlanMenu, MealPlanPrices,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_price_per_day(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() || *value > Decimal::ONE_HUNDRED {
        let mut error = ValidationError::new("range");
        error.message = Some("The price per day must be between 0 and 100.".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct MealPlanValidator {
    #[validate(length(min = 1, max = 255, message = "The meal plan name is required."))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "The SKU is required."))]
    pub sku: String,

    #[validate(length(min = 1, max = 2000, message = "The description is required."))]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "The image path may not exceed 255 characters."))]
    pub image: Option<String>,

    #[validate(custom(function = "validate_price_per_day"))]
    pub breakfast_price_per_day: Decimal,

    #[validate(custom(function = "validate_price_per_day"))]
    pub lunch_price_per_day: Decimal,

    #[validate(custom(function = "validate_price_per_day"))]
    pub dinner_price_per_day: Decimal,

    #[validate(custom(function = "validate_price_per_day"))]
    pub snack_price_per_day: Decimal,
}

impl From<MealPlanValidator> for MealPlanAttributes {
    fn from(payload: MealPlanValidator) -> Self {
        MealPlanAttributes {
            name: payload.name,
            sku: payload.sku,
            description: payload.description,
            image: payload.image,
            prices: MealPlanPrices {
                breakfast_price_per_day: payload.breakfast_price_per_day,
                lunch_price_per_day: payload.lunch_price_per_day,
                dinner_price_per_day: payload.dinner_price_per_day,
                snack_price_per_day: payload.snack_price_per_day,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BuildMealPlanValidator {
    pub meals: MealPlanMenu,
}
