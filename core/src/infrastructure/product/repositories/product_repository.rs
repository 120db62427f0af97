use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        product::{
            entities::Product,
            ports::ProductRepository,
            value_objects::{ProductStatus, ShopProductsFilter},
        },
    },
    entity::{
        categories::{Column as CategoryColumn, Entity as CategoryEntity},
        products::{
            ActiveModel as ProductActiveModel, Column as ProductColumn, Entity as ProductEntity,
            Relation as ProductRelation,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(product: Product) -> ProductActiveModel {
    let variants = product
        .variants
        .and_then(|variants| serde_json::to_value(variants).ok());

    ProductActiveModel {
        id: Set(product.id),
        name: Set(product.name),
        sku: Set(product.sku),
        description: Set(product.description),
        status: Set(product.status.to_string()),
        stock_quantity: Set(product.stock_quantity),
        price_base: Set(product.price.base),
        price_discount: Set(product.price.discount),
        category_id: Set(product.category_id),
        variants: Set(variants),
        metadata: Set(product.metadata),
        is_deleted: Set(product.is_deleted),
        created_at: Set(product.created_at.naive_utc()),
        updated_at: Set(product.updated_at.naive_utc()),
        deleted_at: Set(product.deleted_at.map(|dt| dt.naive_utc())),
    }
}

fn shop_condition(filter: &ShopProductsFilter) -> Condition {
    let mut condition = Condition::all()
        .add(ProductColumn::IsDeleted.eq(false))
        .add(ProductColumn::Status.eq(ProductStatus::Active.to_string()));

    if let Some(term) = filter.search_term() {
        condition = condition.add(
            Condition::any()
                .add(ProductColumn::Name.contains(term))
                .add(ProductColumn::Description.contains(term))
                .add(ProductColumn::Sku.contains(term)),
        );
    }

    if let Some(category) = filter.category_name() {
        condition = condition.add(CategoryColumn::Name.eq(category));
    }

    condition
}

impl ProductRepository for PostgresProductRepository {
    async fn fetch_products(&self) -> Result<Vec<Product>, CoreError> {
        let products = ProductEntity::find()
            .find_also_related(CategoryEntity)
            .filter(ProductColumn::IsDeleted.eq(false))
            .order_by_desc(ProductColumn::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch products: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Product::from)
            .collect();

        Ok(products)
    }

    async fn fetch_active_products(&self, limit: u64) -> Result<Vec<Product>, CoreError> {
        let products = ProductEntity::find()
            .find_also_related(CategoryEntity)
            .filter(ProductColumn::IsDeleted.eq(false))
            .filter(ProductColumn::Status.eq(ProductStatus::Active.to_string()))
            .order_by_desc(ProductColumn::UpdatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch active products: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Product::from)
            .collect();

        Ok(products)
    }

    async fn fetch_shop_products(
        &self,
        filter: ShopProductsFilter,
        limit: u64,
    ) -> Result<(Vec<Product>, u64), CoreError> {
        let condition = shop_condition(&filter);

        let total = ProductEntity::find()
            .join(JoinType::LeftJoin, ProductRelation::Categories.def())
            .filter(condition.clone())
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count shop products: {}", e);
                CoreError::InternalServerError
            })?;

        let products = ProductEntity::find()
            .find_also_related(CategoryEntity)
            .filter(condition)
            .order_by_desc(ProductColumn::UpdatedAt)
            .offset(filter.offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch shop products: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Product::from)
            .collect();

        Ok((products, total))
    }

    async fn get_product_by_id(&self, product_id: Uuid) -> Result<Option<Product>, CoreError> {
        let product = ProductEntity::find_by_id(product_id)
            .find_also_related(CategoryEntity)
            .filter(ProductColumn::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Product::from);

        Ok(product)
    }

    async fn get_product_by_sku(&self, sku: String) -> Result<Option<Product>, CoreError> {
        let product = ProductEntity::find()
            .filter(ProductColumn::Sku.eq(sku))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by sku: {}", e);
                CoreError::InternalServerError
            })?
            .map(Product::from);

        Ok(product)
    }

    async fn get_products_by_ids(&self, product_ids: Vec<Uuid>) -> Result<Vec<Product>, CoreError> {
        let products = ProductEntity::find()
            .filter(ProductColumn::Id.is_in(product_ids))
            .filter(ProductColumn::IsDeleted.eq(false))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get products by ids: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Product::from)
            .collect();

        Ok(products)
    }

    async fn create_product(&self, product: Product) -> Result<Product, CoreError> {
        ProductEntity::insert(to_active_model(product))
            .exec_with_returning(&self.db)
            .await
            .map(Product::from)
            .map_err(|e| {
                error!("Failed to create product: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn update_product(&self, product: Product) -> Result<Product, CoreError> {
        let category = product.category.clone();

        ProductEntity::update(to_active_model(product))
            .exec(&self.db)
            .await
            .map(|model| Product {
                category,
                ..Product::from(model)
            })
            .map_err(|e| {
                error!("Failed to update product: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<(), CoreError> {
        let now = Utc::now().naive_utc();

        ProductEntity::update_many()
            .col_expr(ProductColumn::IsDeleted, Expr::value(true))
            .col_expr(ProductColumn::DeletedAt, Expr::value(now))
            .col_expr(ProductColumn::UpdatedAt, Expr::value(now))
            .filter(ProductColumn::Id.eq(product_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
