use chrono::{TimeZone, Utc};
use tracing::warn;

use crate::{
    domain::product::{
        entities::Product,
        value_objects::{CategoryRef, ProductPrice, ProductStatus},
    },
    entity::{categories::Model as CategoryModel, products::Model as ProductModel},
};

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        let status = model.status.parse().unwrap_or_else(|e| {
            warn!("product {} has {}, treating it as draft", model.id, e);
            ProductStatus::Draft
        });
        let variants = model
            .variants
            .and_then(|value| serde_json::from_value(value).ok());

        Product {
            id: model.id,
            name: model.name,
            sku: model.sku,
            description: model.description,
            status,
            stock_quantity: model.stock_quantity,
            price: ProductPrice {
                base: model.price_base,
                discount: model.price_discount,
            },
            category_id: model.category_id,
            category: None,
            variants,
            metadata: model.metadata,
            is_deleted: model.is_deleted,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
            deleted_at: model.deleted_at.map(|dt| dt.and_utc()),
        }
    }
}

impl From<(ProductModel, Option<CategoryModel>)> for Product {
    fn from((model, category): (ProductModel, Option<CategoryModel>)) -> Self {
        let mut product = Product::from(model);
        product.category = category.map(|c| CategoryRef {
            id: c.id,
            name: c.name,
        });
        product
    }
}
