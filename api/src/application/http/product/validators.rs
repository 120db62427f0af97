use pantry_core::domain::product::value_objects::{
    ProductAttributes, ProductPrice, ProductStatus, ProductVariant,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductVariantValidator {
    #[validate(length(
        min = 1,
        max = 255,
        message = "The variant name is required when variants are provided."
    ))]
    pub option: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "The variant value is required when variants are provided."
    ))]
    pub value: String,

    #[schema(value_type = f64)]
    pub price: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductValidator {
    #[validate(length(
        min = 1,
        max = 255,
        message = "The product name is required and may not be greater than 255 characters."
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "The SKU is required and may not be greater than 100 characters."
    ))]
    pub sku: String,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "The product description is required and may not be greater than 1000 characters."
    ))]
    pub description: String,

    pub status: ProductStatus,

    #[validate(range(min = 0, message = "The stock quantity must be at least 0."))]
    pub stock_quantity: i32,

    pub price: ProductPrice,

    pub category_id: Uuid,

    #[serde(default)]
    #[validate(nested)]
    pub variants: Option<Vec<ProductVariantValidator>>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
}

impl From<ProductValidator> for ProductAttributes {
    fn from(payload: ProductValidator) -> Self {
        ProductAttributes {
            name: payload.name,
            sku: payload.sku,
            description: payload.description,
            status: payload.status,
            stock_quantity: payload.stock_quantity,
            price: payload.price,
            category_id: payload.category_id,
            variants: payload.variants.map(|variants| {
                variants
                    .into_iter()
                    .map(|variant| ProductVariant {
                        option: variant.option,
                        value: variant.value,
                        price: variant.price,
                    })
                    .collect()
            }),
            metadata: payload.metadata,
        }
    }
}
