use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        category::{entities::Category, ports::CategoryRepository},
        common::entities::app_errors::CoreError,
        product::value_objects::ProductStatus,
    },
    entity::{
        categories::{
            ActiveModel as CategoryActiveModel, Column as CategoryColumn,
            Entity as CategoryEntity, Relation as CategoryRelation,
        },
        products::Column as ProductColumn,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(category: Category) -> CategoryActiveModel {
    CategoryActiveModel {
        id: Set(category.id),
        name: Set(category.name),
        slug: Set(category.slug),
        is_active: Set(category.is_active),
        is_deleted: Set(category.is_deleted),
        created_at: Set(category.created_at.naive_utc()),
        updated_at: Set(category.updated_at.naive_utc()),
        deleted_at: Set(category.deleted_at.map(|dt| dt.naive_utc())),
    }
}

impl CategoryRepository for PostgresCategoryRepository {
    async fn fetch_categories(&self) -> Result<Vec<Category>, CoreError> {
        let categories = CategoryEntity::find()
            .filter(CategoryColumn::IsDeleted.eq(false))
            .order_by_asc(CategoryColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch categories: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Category::from)
            .collect();

        Ok(categories)
    }

    async fn fetch_categories_with_active_products(&self) -> Result<Vec<Category>, CoreError> {
        let categories = CategoryEntity::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                CategoryRelation::Products.def(),
            )
            .filter(CategoryColumn::IsDeleted.eq(false))
            .filter(ProductColumn::IsDeleted.eq(false))
            .filter(ProductColumn::Status.eq(ProductStatus::Active.to_string()))
            .distinct()
            .order_by_asc(CategoryColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch shop categories: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Category::from)
            .collect();

        Ok(categories)
    }

    async fn get_category_by_id(&self, category_id: Uuid) -> Result<Option<Category>, CoreError> {
        let category = CategoryEntity::find_by_id(category_id)
            .filter(CategoryColumn::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get category by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Category::from);

        Ok(category)
    }

    async fn create_category(&self, category: Category) -> Result<Category, CoreError> {
        CategoryEntity::insert(to_active_model(category))
            .exec_with_returning(&self.db)
            .await
            .map(Category::from)
            .map_err(|e| {
                error!("Failed to create category: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn update_category(&self, category: Category) -> Result<Category, CoreError> {
        CategoryEntity::update(to_active_model(category))
            .exec(&self.db)
            .await
            .map(Category::from)
            .map_err(|e| {
                error!("Failed to update category: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn delete_category(&self, category_id: Uuid) -> Result<(), CoreError> {
        let now = Utc::now().naive_utc();

        CategoryEntity::update_many()
            .col_expr(CategoryColumn::IsDeleted, Expr::value(true))
            .col_expr(CategoryColumn::DeletedAt, Expr::value(now))
            .col_expr(CategoryColumn::UpdatedAt, Expr::value(now))
            .filter(CategoryColumn::Id.eq(category_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete category: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
