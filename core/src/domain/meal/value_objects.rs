use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::entities::field_errors::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealStatus {
    Active,
    Inactive,
}

impl Display for MealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealStatus::Active => write!(f, "active"),
            MealStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for MealStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MealStatus::Active),
            "inactive" => Ok(MealStatus::Inactive),
            other => Err(format!("unknown meal status: {other}")),
        }
    }
}

/// Per-serving nutrition facts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fats: f64,
}

impl Nutrition {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (field, value) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbohydrates", self.carbohydrates),
            ("fats", self.fats),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.add(field, format!("The {field} must be at least 0."));
            }
        }
        errors
    }
}

#[derive(Debug, Clone)]
pub struct MealAttributes {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub sku: String,
    pub nutrition: Nutrition,
}

#[derive(Debug, Clone)]
pub struct UpdateMealInput {
    pub meal_id: Uuid,
    pub attributes: MealAttributes,
    pub status: MealStatus,
}

#[derive(Debug, Clone, Default)]
pub struct GetMealsFilter {
    pub status: Option<MealStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_nutrition_is_rejected() {
        let nutrition = Nutrition {
            calories: 420.0,
            protein: -1.0,
            carbohydrates: 30.0,
            fats: f64::NAN,
        };

        let errors = nutrition.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains("protein"));
        assert!(errors.contains("fats"));
    }
}
