use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        meal::{entities::Meal, ports::MealRepository, value_objects::GetMealsFilter},
    },
    entity::meals::{ActiveModel as MealActiveModel, Column as MealColumn, Entity as MealEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresMealRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(meal: Meal) -> MealActiveModel {
    MealActiveModel {
        id: Set(meal.id),
        name: Set(meal.name),
        description: Set(meal.description),
        image: Set(meal.image),
        sku: Set(meal.sku),
        calories: Set(meal.nutrition.calories),
        protein: Set(meal.nutrition.protein),
        carbohydrates: Set(meal.nutrition.carbohydrates),
        fats: Set(meal.nutrition.fats),
        status: Set(meal.status.to_string()),
        is_deleted: Set(meal.is_deleted),
        created_at: Set(meal.created_at.naive_utc()),
        updated_at: Set(meal.updated_at.naive_utc()),
        deleted_at: Set(meal.deleted_at.map(|dt| dt.naive_utc())),
    }
}

impl MealRepository for PostgresMealRepository {
    async fn fetch_meals(&self, filter: GetMealsFilter) -> Result<Vec<Meal>, CoreError> {
        let mut query = MealEntity::find().filter(MealColumn::IsDeleted.eq(false));

        if let Some(status) = filter.status {
            query = query.filter(MealColumn::Status.eq(status.to_string()));
        }

        let meals = query
            .order_by_asc(MealColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch meals: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Meal::from)
            .collect();

        Ok(meals)
    }

    async fn get_meal_by_id(&self, meal_id: Uuid) -> Result<Option<Meal>, CoreError> {
        let meal = MealEntity::find_by_id(meal_id)
            .filter(MealColumn::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Meal::from);

        Ok(meal)
    }

    async fn get_meal_by_sku(&self, sku: String) -> Result<Option<Meal>, CoreError> {
        let meal = MealEntity::find()
            .filter(MealColumn::Sku.eq(sku))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal by sku: {}", e);
                CoreError::InternalServerError
            })?
            .map(Meal::from);

        Ok(meal)
    }

    async fn find_existing_meal_ids(&self, meal_ids: Vec<Uuid>) -> Result<Vec<Uuid>, CoreError> {
        if meal_ids.is_empty() {
            return Ok(Vec::new());
        }

        MealEntity::find()
            .select_only()
            .column(MealColumn::Id)
            .filter(MealColumn::Id.is_in(meal_ids))
            .filter(MealColumn::IsDeleted.eq(false))
            .into_tuple::<Uuid>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to look up meal ids: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn create_meal(&self, meal: Meal) -> Result<Meal, CoreError> {
        MealEntity::insert(to_active_model(meal))
            .exec_with_returning(&self.db)
            .await
            .map(Meal::from)
            .map_err(|e| {
                error!("Failed to create meal: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn update_meal(&self, meal: Meal) -> Result<Meal, CoreError> {
        MealEntity::update(to_active_model(meal))
            .exec(&self.db)
            .await
            .map(Meal::from)
            .map_err(|e| {
                error!("Failed to update meal: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn delete_meal(&self, meal_id: Uuid) -> Result<(), CoreError> {
        let now = Utc::now().naive_utc();

        MealEntity::update_many()
            .col_expr(MealColumn::IsDeleted, Expr::value(true))
            .col_expr(MealColumn::DeletedAt, Expr::value(now))
            .col_expr(MealColumn::UpdatedAt, Expr::value(now))
            .filter(MealColumn::Id.eq(meal_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete meal: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
