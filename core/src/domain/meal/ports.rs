use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    meal::{
        entities::Meal,
        value_objects::{GetMealsFilter, MealAttributes, UpdateMealInput},
    },
};

pub trait MealService: Send + Sync {
    fn get_meals(
        &self,
        filter: GetMealsFilter,
    ) -> impl Future<Output = Result<Vec<Meal>, CoreError>> + Send;

    fn get_meal(&self, meal_id: Uuid) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn create_meal(
        &self,
        identity: Identity,
        input: MealAttributes,
    ) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn update_meal(
        &self,
        identity: Identity,
        input: UpdateMealInput,
    ) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn delete_meal(
        &self,
        identity: Identity,
        meal_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MealRepository: Send + Sync {
    fn fetch_meals(
        &self,
        filter: GetMealsFilter,
    ) -> impl Future<Output = Result<Vec<Meal>, CoreError>> + Send;

    fn get_meal_by_id(
        &self,
        meal_id: Uuid,
    ) -> impl Future<Output = Result<Option<Meal>, CoreError>> + Send;

    fn get_meal_by_sku(
        &self,
        sku: String,
    ) -> impl Future<Output = Result<Option<Meal>, CoreError>> + Send;

    /// Ids from `meal_ids` that belong to a non-deleted meal.
    fn find_existing_meal_ids(
        &self,
        meal_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Uuid>, CoreError>> + Send;

    fn create_meal(&self, meal: Meal) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn update_meal(&self, meal: Meal) -> impl Future<Output = Result<Meal, CoreError>> + Send;

    fn delete_meal(&self, meal_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
