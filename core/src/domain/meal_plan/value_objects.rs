use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::entities::field_errors::FieldErrors;

/// Upper bound for any per-day meal price.
pub const MAX_PRICE_PER_DAY: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealPlanStatus {
    Active,
    Inactive,
}

impl Display for MealPlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealPlanStatus::Active => write!(f, "active"),
            MealPlanStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for MealPlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MealPlanStatus::Active),
            "inactive" => Ok(MealPlanStatus::Inactive),
            other => Err(format!("unknown meal plan status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Meal types served when a subscriber states no preference.
    pub const DEFAULT_PREFERENCES: [MealType; 3] =
        [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealPlanPrices {
    pub breakfast_price_per_day: Decimal,
    pub lunch_price_per_day: Decimal,
    pub dinner_price_per_day: Decimal,
    pub snack_price_per_day: Decimal,
}

impl MealPlanPrices {
    pub fn price_for(&self, meal_type: MealType) -> Decimal {
        match meal_type {
            MealType::Breakfast => self.breakfast_price_per_day,
            MealType::Lunch => self.lunch_price_per_day,
            MealType::Dinner => self.dinner_price_per_day,
            MealType::Snack => self.snack_price_per_day,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (field, value) in [
            ("breakfast_price_per_day", self.breakfast_price_per_day),
            ("lunch_price_per_day", self.lunch_price_per_day),
            ("dinner_price_per_day", self.dinner_price_per_day),
            ("snack_price_per_day", self.snack_price_per_day),
        ] {
            if value.is_sign_negative() || value > MAX_PRICE_PER_DAY {
                errors.add(field, format!("The {field} must be between 0 and 100."));
            }
        }
        errors
    }
}

/// Builder output: the meals offered for each main meal type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealPlanMenu {
    #[serde(default)]
    pub breakfast: Vec<Uuid>,
    #[serde(default)]
    pub lunch: Vec<Uuid>,
    #[serde(default)]
    pub dinner: Vec<Uuid>,
}

impl MealPlanMenu {
    pub fn meal_ids(&self) -> impl Iterator<Item = (MealType, &Uuid)> {
        self.breakfast
            .iter()
            .map(|id| (MealType::Breakfast, id))
            .chain(self.lunch.iter().map(|id| (MealType::Lunch, id)))
            .chain(self.dinner.iter().map(|id| (MealType::Dinner, id)))
    }
}

#[derive(Debug, Clone)]
pub struct MealPlanAttributes {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub image: Option<String>,
    pub prices: MealPlanPrices,
}

#[derive(Debug, Clone)]
pub struct UpdateMealPlanInput {
    pub meal_plan_id: Uuid,
    pub attributes: MealPlanAttributes,
}

#[derive(Debug, Clone)]
pub struct BuildMealPlanInput {
    pub meal_plan_id: Uuid,
    pub menu: MealPlanMenu,
}
