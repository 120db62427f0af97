use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    meal::value_objects::{MealAttributes, MealStatus, Nutrition},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub sku: String,
    #[serde(flatten)]
    pub nutrition: Nutrition,
    pub status: MealStatus,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Meal {
    /// New meals are always created active.
    pub fn new(attributes: MealAttributes) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: attributes.name,
            description: attributes.description,
            image: attributes.image,
            sku: attributes.sku,
            nutrition: attributes.nutrition,
            status: MealStatus::Active,
            is_deleted: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn update(&mut self, attributes: MealAttributes) {
        self.name = attributes.name;
        self.description = attributes.description;
        self.image = attributes.image;
        self.sku = attributes.sku;
        self.nutrition = attributes.nutrition;
        self.updated_at = Utc::now();
    }

    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
        self.deleted_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }
}
