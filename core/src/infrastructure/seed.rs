use rust_decimal::Decimal;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    category::{entities::Category, ports::CategoryRepository},
    common::entities::app_errors::CoreError,
    product::{
        entities::Product,
        ports::ProductRepository,
        value_objects::{ProductAttributes, ProductPrice, ProductStatus},
    },
};

struct SampleProduct {
    category: &'static str,
    name: &'static str,
    sku: &'static str,
    description: &'static str,
    stock_quantity: i32,
    base_cents: i64,
    discount_cents: Option<i64>,
    metadata: serde_json::Value,
}

const CATEGORIES: [&str; 4] = ["Copy Paper", "Cardstock", "Specialty Paper", "Envelopes"];

fn sample_products() -> Vec<SampleProduct> {
    vec![
        SampleProduct {
            category: "Copy Paper",
            name: "A4 White Copy Paper - 80gsm (1 Ream)",
            sku: "A4-WHITE-80-1R",
            description: "A4 white copy paper, 80gsm, 500 sheets per ream.",
            stock_quantity: 500,
            base_cents: 499,
            discount_cents: None,
            metadata: json!({ "gsm": 80, "size": "A4", "sheets_per_pack": 500 }),
        },
        SampleProduct {
            category: "Copy Paper",
            name: "A4 White Copy Paper - 80gsm (5 Reams)",
            sku: "A4-WHITE-80-5R",
            description: "Bulk pack of A4 white copy paper, 2500 sheets in total.",
            stock_quantity: 200,
            base_cents: 2299,
            discount_cents: Some(1999),
            metadata: json!({ "gsm": 80, "size": "A4", "sheets_per_pack": 2500 }),
        },
        SampleProduct {
            category: "Copy Paper",
            name: "A4 Recycled Copy Paper - 80gsm (1 Ream)",
            sku: "A4-RECYCLED-80-1R",
            description: "Recycled A4 copy paper, 500 sheets.",
            stock_quantity: 300,
            base_cents: 599,
            discount_cents: None,
            metadata: json!({ "gsm": 80, "size": "A4", "recycled": true }),
        },
        SampleProduct {
            category: "Cardstock",
            name: "A4 White Cardstock - 200gsm (100 sheets)",
            sku: "A4-CARDSTOCK-200-WHITE",
            description: "Heavy white cardstock for invitations and crafts.",
            stock_quantity: 200,
            base_cents: 1299,
            discount_cents: None,
            metadata: json!({ "gsm": 200, "size": "A4", "sheets_per_pack": 100 }),
        },
        SampleProduct {
            category: "Cardstock",
            name: "A5 Kraft Cardstock - 300gsm (100 sheets)",
            sku: "A5-CARDSTOCK-300-KRAFT",
            description: "Brown kraft cardstock with a natural finish.",
            stock_quantity: 130,
            base_cents: 1199,
            discount_cents: None,
            metadata: json!({ "gsm": 300, "size": "A5", "sheets_per_pack": 100 }),
        },
        SampleProduct {
            category: "Specialty Paper",
            name: "A4 Glossy Photo Paper - 260gsm (20 sheets)",
            sku: "A4-PHOTO-260-GLOSSY",
            description: "Glossy photo paper for inkjet printers.",
            stock_quantity: 180,
            base_cents: 899,
            discount_cents: None,
            metadata: json!({ "gsm": 260, "size": "A4", "finish": "Glossy" }),
        },
        SampleProduct {
            category: "Specialty Paper",
            name: "A4 Watercolor Paper - 300gsm (25 sheets)",
            sku: "A4-WATERCOLOR-300",
            description: "Cold-pressed watercolor paper.",
            stock_quantity: 90,
            base_cents: 1899,
            discount_cents: None,
            metadata: json!({ "gsm": 300, "size": "A4", "finish": "Cold pressed" }),
        },
        SampleProduct {
            category: "Envelopes",
            name: "DL White Envelopes - Self Seal (100 pack)",
            sku: "ENV-DL-WHITE-SS-100",
            description: "DL white envelopes with a self-seal closure.",
            stock_quantity: 300,
            base_cents: 799,
            discount_cents: None,
            metadata: json!({ "size": "DL", "closure": "Self seal", "pack_size": 100 }),
        },
        SampleProduct {
            category: "Envelopes",
            name: "C5 Window Envelopes - Self Seal (50 pack)",
            sku: "ENV-C5-WINDOW-SS-50",
            description: "C5 window envelopes for business correspondence.",
            stock_quantity: 200,
            base_cents: 699,
            discount_cents: None,
            metadata: json!({ "size": "C5", "window": true, "pack_size": 50 }),
        },
    ]
}

/// Inserts the sample paper-goods catalog. Does nothing once any category exists.
///
/// Returns the number of products inserted.
pub async fn seed_catalog<C, P>(categories: &C, products: &P) -> Result<usize, CoreError>
where
    C: CategoryRepository,
    P: ProductRepository,
{
    if !categories.fetch_categories().await?.is_empty() {
        info!("catalog already populated, skipping seed");
        return Ok(0);
    }

    let mut category_ids: Vec<(&str, Uuid)> = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        let category = categories
            .create_category(Category::new(name.to_string(), None, true))
            .await?;
        category_ids.push((name, category.id));
    }

    let mut inserted = 0;
    for sample in sample_products() {
        let Some((_, category_id)) = category_ids.iter().find(|(name, _)| *name == sample.category)
        else {
            continue;
        };

        products
            .create_product(Product::new(ProductAttributes {
                name: sample.name.to_string(),
                sku: sample.sku.to_string(),
                description: sample.description.to_string(),
                status: ProductStatus::Active,
                stock_quantity: sample.stock_quantity,
                price: ProductPrice {
                    base: Decimal::new(sample.base_cents, 2),
                    discount: sample.discount_cents.map(|cents| Decimal::new(cents, 2)),
                },
                category_id: *category_id,
                variants: None,
                metadata: Some(sample.metadata),
            }))
            .await?;
        inserted += 1;
    }

    info!(categories = CATEGORIES.len(), products = inserted, "catalog seeded");

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{category::ports::MockCategoryRepository, product::ports::MockProductRepository};

    #[tokio::test]
    async fn test_seed_skips_populated_catalog() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_fetch_categories().returning(|| {
            Box::pin(async { Ok(vec![Category::new("Copy Paper".to_string(), None, true)]) })
        });
        categories.expect_create_category().never();
        let mut products = MockProductRepository::new();
        products.expect_create_product().never();

        let inserted = seed_catalog(&categories, &products).await.unwrap();
        assert_eq!(inserted, 0);
    }

    #[tokio::test]
    async fn test_seed_inserts_every_sample_product() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_fetch_categories()
            .returning(|| Box::pin(async { Ok(vec![]) }));
        categories
            .expect_create_category()
            .times(CATEGORIES.len())
            .returning(|category| Box::pin(async move { Ok(category) }));
        let mut products = MockProductRepository::new();
        products
            .expect_create_product()
            .times(sample_products().len())
            .returning(|product| Box::pin(async move { Ok(product) }));

        let inserted = seed_catalog(&categories, &products).await.unwrap();
        assert_eq!(inserted, sample_products().len());
    }
}
