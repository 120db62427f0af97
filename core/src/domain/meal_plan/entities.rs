use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    meal_plan::value_objects::{MealPlanAttributes, MealPlanMenu, MealPlanPrices, MealPlanStatus},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub image: Option<String>,
    #[serde(flatten)]
    pub prices: MealPlanPrices,
    pub meals: Option<MealPlanMenu>,
    pub status: MealPlanStatus,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl MealPlan {
    /// Plans stay inactive until the builder step assigns their menu.
    pub fn new(attributes: MealPlanAttributes) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: attributes.name,
            sku: attributes.sku,
            description: attributes.description,
            image: attributes.image,
            prices: attributes.prices,
            meals: None,
            status: MealPlanStatus::Inactive,
            is_deleted: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn update(&mut self, attributes: MealPlanAttributes) {
        self.name = attributes.name;
        self.sku = attributes.sku;
        self.description = attributes.description;
        self.image = attributes.image;
        self.prices = attributes.prices;
        self.updated_at = Utc::now();
    }

    pub fn build(&mut self, menu: MealPlanMenu) {
        self.meals = Some(menu);
        self.status = MealPlanStatus::Active;
        self.updated_at = Utc::now();
    }

    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
        self.deleted_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_build_activates_plan() {
        let mut plan = MealPlan::new(MealPlanAttributes {
            name: "Balanced".to_string(),
            sku: "MP-BAL".to_string(),
            description: "Three meals a day".to_string(),
            image: None,
            prices: MealPlanPrices {
                breakfast_price_per_day: Decimal::from(3),
                lunch_price_per_day: Decimal::from(4),
                dinner_price_per_day: Decimal::from(5),
                snack_price_per_day: Decimal::ZERO,
            },
        });
        assert_eq!(plan.status, MealPlanStatus::Inactive);

        plan.build(MealPlanMenu::default());
        assert_eq!(plan.status, MealPlanStatus::Active);
        assert!(plan.meals.is_some());
    }
}
