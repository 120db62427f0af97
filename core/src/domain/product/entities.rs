use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    product::value_objects::{
        CategoryRef, ProductAttributes, ProductPrice, ProductStatus, ProductVariant,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub description: String,
    pub status: ProductStatus,
    pub stock_quantity: i32,
    pub price: ProductPrice,
    pub category_id: Uuid,
    pub category: Option<CategoryRef>,
    pub variants: Option<Vec<ProductVariant>>,
    #[schema(value_type = Object)]
    pub metadata: serde_json::Value,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(attributes: ProductAttributes) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: attributes.name,
            sku: attributes.sku,
            description: attributes.description,
            status: attributes.status,
            stock_quantity: attributes.stock_quantity,
            price: attributes.price,
            category_id: attributes.category_id,
            category: None,
            variants: attributes.variants,
            metadata: attributes
                .metadata
                .unwrap_or_else(|| serde_json::Value::Object(Default::default())),
            is_deleted: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Replaces every attribute; the stored metadata survives when none is sent.
    pub fn update(&mut self, attributes: ProductAttributes) {
        self.name = attributes.name;
        self.sku = attributes.sku;
        self.description = attributes.description;
        self.status = attributes.status;
        self.stock_quantity = attributes.stock_quantity;
        self.price = attributes.price;
        if self.category_id != attributes.category_id {
            self.category = None;
        }
        self.category_id = attributes.category_id;
        self.variants = attributes.variants;
        if let Some(metadata) = attributes.metadata {
            self.metadata = metadata;
        }
        self.updated_at = Utc::now();
    }

    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
        self.deleted_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active && !self.is_deleted
    }
}
