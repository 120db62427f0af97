use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoryValidator {
    #[validate(length(
        min = 1,
        max = 255,
        message = "The category name is required and may not exceed 255 characters."
    ))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "The slug may not exceed 255 characters."))]
    pub slug: Option<String>,

    #[serde(default)]
    pub is_active: Option<bool>,
}
