use chrono::{TimeZone, Utc};
use tracing::warn;

use crate::{
    domain::meal_plan::{
        entities::MealPlan,
        value_objects::{MealPlanMenu, MealPlanPrices, MealPlanStatus},
    },
    entity::meal_plans::Model as MealPlanModel,
};

impl From<MealPlanModel> for MealPlan {
    fn from(model: MealPlanModel) -> Self {
        let status = model.status.parse().unwrap_or_else(|e| {
            warn!("meal plan {} has {}, treating it as inactive", model.id, e);
            MealPlanStatus::Inactive
        });
        let meals = model.meals.and_then(|value| {
            serde_json::from_value::<MealPlanMenu>(value)
                .map_err(|e| warn!("meal plan {} has an unreadable menu: {}", model.id, e))
                .ok()
        });

        MealPlan {
            id: model.id,
            name: model.name,
            sku: model.sku,
            description: model.description,
            image: model.image,
            prices: MealPlanPrices {
                breakfast_price_per_day: model.breakfast_price_per_day,
                lunch_price_per_day: model.lunch_price_per_day,
                dinner_price_per_day: model.dinner_price_per_day,
                snack_price_per_day: model.snack_price_per_day,
            },
            meals,
            status,
            is_deleted: model.is_deleted,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
            deleted_at: model.deleted_at.map(|dt| dt.and_utc()),
        }
    }
}
