use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::MealPlan,
        value_objects::{BuildMealPlanInput, MealPlanAttributes, UpdateMealPlanInput},
    },
};

pub trait MealPlanService: Send + Sync {
    fn get_meal_plans(&self) -> impl Future<Output = Result<Vec<MealPlan>, CoreError>> + Send;

    fn get_meal_plan(
        &self,
        meal_plan_id: Uuid,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn get_home_meal_plans(&self)
    -> impl Future<Output = Result<Vec<MealPlan>, CoreError>> + Send;

    fn create_meal_plan(
        &self,
        identity: Identity,
        input: MealPlanAttributes,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn update_meal_plan(
        &self,
        identity: Identity,
        input: UpdateMealPlanInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn build_meal_plan(
        &self,
        identity: Identity,
        input: BuildMealPlanInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn delete_meal_plan(
        &self,
        identity: Identity,
        meal_plan_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MealPlanRepository: Send + Sync {
    fn fetch_meal_plans(&self) -> impl Future<Output = Result<Vec<MealPlan>, CoreError>> + Send;

    fn fetch_active_meal_plans(
        &self,
    ) -> impl Future<Output = Result<Vec<MealPlan>, CoreError>> + Send;

    fn get_meal_plan_by_id(
        &self,
        meal_plan_id: Uuid,
    ) -> impl Future<Output = Result<Option<MealPlan>, CoreError>> + Send;

    fn get_meal_plan_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<MealPlan>, CoreError>> + Send;

    fn get_meal_plan_by_sku(
        &self,
        sku: String,
    ) -> impl Future<Output = Result<Option<MealPlan>, CoreError>> + Send;

    fn create_meal_plan(
        &self,
        meal_plan: MealPlan,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn update_meal_plan(
        &self,
        meal_plan: MealPlan,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn delete_meal_plan(
        &self,
        meal_plan_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
