use pantry_core::domain::meal::value_objects::{MealAttributes, MealStatus, Nutrition};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMealValidator {
    #[validate(length(min = 1, max = 255, message = "The meal name is required."))]
    pub name: String,

    #[validate(length(min = 1, message = "The meal description is required."))]
    pub description: String,

    #[serde(default)]
    pub image: Option<String>,

    #[validate(length(min = 1, max = 100, message = "The SKU is required."))]
    pub sku: String,

    #[validate(range(min = 0.0, message = "Calories must be at least 0."))]
    pub calories: f64,

    #[validate(range(min = 0.0, message = "Protein must be at least 0."))]
    pub protein: f64,

    #[validate(range(min = 0.0, message = "Carbohydrates must be at least 0."))]
    pub carbohydrates: f64,

    #[validate(range(min = 0.0, message = "Fats must be at least 0."))]
    pub fats: f64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMealValidator {
    #[serde(flatten)]
    #[validate(nested)]
    pub meal: CreateMealValidator,

    pub status: MealStatus,
}

impl From<CreateMealValidator> for MealAttributes {
    fn from(payload: CreateMealValidator) -> Self {
        MealAttributes {
            name: payload.name,
            description: payload.description,
            image: payload.image,
            sku: payload.sku,
            nutrition: Nutrition {
                calories: payload.calories,
                protein: payload.protein,
                carbohydrates: payload.carbohydrates,
                fats: payload.fats,
            },
        }
    }
}
