use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::Expr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        meal_plan::{entities::MealPlan, ports::MealPlanRepository, value_objects::MealPlanStatus},
    },
    entity::meal_plans::{
        ActiveModel as MealPlanActiveModel, Column as MealPlanColumn, Entity as MealPlanEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresMealPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(meal_plan: MealPlan) -> MealPlanActiveModel {
    let meals = meal_plan
        .meals
        .and_then(|menu| serde_json::to_value(menu).ok());

    MealPlanActiveModel {
        id: Set(meal_plan.id),
        name: Set(meal_plan.name),
        sku: Set(meal_plan.sku),
        description: Set(meal_plan.description),
        image: Set(meal_plan.image),
        breakfast_price_per_day: Set(meal_plan.prices.breakfast_price_per_day),
        lunch_price_per_day: Set(meal_plan.prices.lunch_price_per_day),
        dinner_price_per_day: Set(meal_plan.prices.dinner_price_per_day),
        snack_price_per_day: Set(meal_plan.prices.snack_price_per_day),
        meals: Set(meals),
        status: Set(meal_plan.status.to_string()),
        is_deleted: Set(meal_plan.is_deleted),
        created_at: Set(meal_plan.created_at.naive_utc()),
        updated_at: Set(meal_plan.updated_at.naive_utc()),
        deleted_at: Set(meal_plan.deleted_at.map(|dt| dt.naive_utc())),
    }
}

impl MealPlanRepository for PostgresMealPlanRepository {
    async fn fetch_meal_plans(&self) -> Result<Vec<MealPlan>, CoreError> {
        let meal_plans = MealPlanEntity::find()
            .filter(MealPlanColumn::IsDeleted.eq(false))
            .order_by_desc(MealPlanColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch meal plans: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(MealPlan::from)
            .collect();

        Ok(meal_plans)
    }

    async fn fetch_active_meal_plans(&self) -> Result<Vec<MealPlan>, CoreError> {
        let meal_plans = MealPlanEntity::find()
            .filter(MealPlanColumn::IsDeleted.eq(false))
            .filter(MealPlanColumn::Status.eq(MealPlanStatus::Active.to_string()))
            .order_by_asc(MealPlanColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch active meal plans: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(MealPlan::from)
            .collect();

        Ok(meal_plans)
    }

    async fn get_meal_plan_by_id(&self, meal_plan_id: Uuid) -> Result<Option<MealPlan>, CoreError> {
        let meal_plan = MealPlanEntity::find_by_id(meal_plan_id)
            .filter(MealPlanColumn::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal plan by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(MealPlan::from);

        Ok(meal_plan)
    }

    async fn get_meal_plan_by_name(&self, name: String) -> Result<Option<MealPlan>, CoreError> {
        let meal_plan = MealPlanEntity::find()
            .filter(MealPlanColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal plan by name: {}", e);
                CoreError::InternalServerError
            })?
            .map(MealPlan::from);

        Ok(meal_plan)
    }

    async fn get_meal_plan_by_sku(&self, sku: String) -> Result<Option<MealPlan>, CoreError> {
        let meal_plan = MealPlanEntity::find()
            .filter(MealPlanColumn::Sku.eq(sku))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal plan by sku: {}", e);
                CoreError::InternalServerError
            })?
            .map(MealPlan::from);

        Ok(meal_plan)
    }

    async fn create_meal_plan(&self, meal_plan: MealPlan) -> Result<MealPlan, CoreError> {
        MealPlanEntity::insert(to_active_model(meal_plan))
            .exec_with_returning(&self.db)
            .await
            .map(MealPlan::from)
            .map_err(|e| {
                error!("Failed to create meal plan: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn update_meal_plan(&self, meal_plan: MealPlan) -> Result<MealPlan, CoreError> {
        MealPlanEntity::update(to_active_model(meal_plan))
            .exec(&self.db)
            .await
            .map(MealPlan::from)
            .map_err(|e| {
                error!("Failed to update meal plan: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn delete_meal_plan(&self, meal_plan_id: Uuid) -> Result<(), CoreError> {
        let now = Utc::now().naive_utc();

        MealPlanEntity::update_many()
            .col_expr(MealPlanColumn::IsDeleted, Expr::value(true))
            .col_expr(MealPlanColumn::DeletedAt, Expr::value(now))
            .col_expr(MealPlanColumn::UpdatedAt, Expr::value(now))
            .filter(MealPlanColumn::Id.eq(meal_plan_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete meal plan: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
