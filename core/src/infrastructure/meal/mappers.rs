use chrono::{TimeZone, Utc};
use tracing::warn;

use crate::{
    domain::meal::{
        entities::Meal,
        value_objects::{MealStatus, Nutrition},
    },
    entity::meals::Model as MealModel,
};

impl From<MealModel> for Meal {
    fn from(model: MealModel) -> Self {
        let status = model.status.parse().unwrap_or_else(|e| {
            warn!("meal {} has {}, treating it as inactive", model.id, e);
            MealStatus::Inactive
        });

        Meal {
            id: model.id,
            name: model.name,
            description: model.description,
            image: model.image,
            sku: model.sku,
            nutrition: Nutrition {
                calories: model.calories,
                protein: model.protein,
                carbohydrates: model.carbohydrates,
                fats: model.fats,
            },
            status,
            is_deleted: model.is_deleted,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
            deleted_at: model.deleted_at.map(|dt| dt.and_utc()),
        }
    }
}
