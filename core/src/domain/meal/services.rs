use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    category::ports::CategoryRepository,
    common::{
        entities::app_errors::CoreError,
        policies::{CatalogPolicy, ensure_policy},
        services::Service,
    },
    health::ports::HealthCheckRepository,
    meal::{
        entities::Meal,
        ports::{MealRepository, MealService},
        value_objects::{GetMealsFilter, MealAttributes, UpdateMealInput},
    },
    meal_plan::ports::MealPlanRepository,
    media::ports::ObjectStoragePort,
    order::ports::OrderRepository,
    product::ports::ProductRepository,
};

impl<CA, PR, ME, MP, OR, OS, TV, HC> Service<CA, PR, ME, MP, OR, OS, TV, HC>
where
    CA: CategoryRepository,
    PR: ProductRepository,
    ME: MealRepository,
    MP: MealPlanRepository,
    OR: OrderRepository,
    OS: ObjectStoragePort,
    TV: TokenVerifier,
    HC: HealthCheckRepository,
{
    async fn check_meal_attributes(
        &self,
        attributes: &MealAttributes,
        current: Option<Uuid>,
    ) -> Result<(), CoreError> {
        let mut errors = attributes.nutrition.validate();

        if let Some(existing) = self
            .meal_repository
            .get_meal_by_sku(attributes.sku.clone())
            .await?
            && Some(existing.id) != current
        {
            errors.add("sku", "The sku has already been taken.");
        }

        errors.into_result().map_err(CoreError::from)
    }
}

impl<CA, PR, ME, MP, OR, OS, TV, HC> MealService for Service<CA, PR, ME, MP, OR, OS, TV, HC>
where
    CA: CategoryRepository,
    PR: ProductRepository,
    ME: MealRepository,
    MP: MealPlanRepository,
    OR: OrderRepository,
    OS: ObjectStoragePort,
    TV: TokenVerifier,
    HC: HealthCheckRepository,
{
    async fn get_meals(&self, filter: GetMealsFilter) -> Result<Vec<Meal>, CoreError> {
        self.meal_repository.fetch_meals(filter).await
    }

    async fn get_meal(&self, meal_id: Uuid) -> Result<Meal, CoreError> {
        self.meal_repository
            .get_meal_by_id(meal_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, identity), fields(sku = %input.sku))]
    async fn create_meal(
        &self,
        identity: Identity,
        input: MealAttributes,
    ) -> Result<Meal, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        self.check_meal_attributes(&input, None).await?;

        self.meal_repository.create_meal(Meal::new(input)).await
    }

    #[instrument(skip(self, identity), fields(meal_id = %input.meal_id))]
    async fn update_meal(
        &self,
        identity: Identity,
        input: UpdateMealInput,
    ) -> Result<Meal, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        let mut meal = self
            .meal_repository
            .get_meal_by_id(input.meal_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.check_meal_attributes(&input.attributes, Some(meal.id))
            .await?;

        meal.update(input.attributes);
        meal.status = input.status;
        self.meal_repository.update_meal(meal).await
    }

    #[instrument(skip(self, identity))]
    async fn delete_meal(&self, identity: Identity, meal_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        self.meal_repository
            .get_meal_by_id(meal_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.meal_repository.delete_meal(meal_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::services::test_support::{Mocks, admin},
        meal::value_objects::{MealStatus, Nutrition},
    };

    fn attributes(sku: &str) -> MealAttributes {
        MealAttributes {
            name: "Overnight oats".to_string(),
            description: "Oats, chia and berries".to_string(),
            image: None,
            sku: sku.to_string(),
            nutrition: Nutrition {
                calories: 350.0,
                protein: 12.0,
                carbohydrates: 50.0,
                fats: 9.0,
            },
        }
    }

    #[tokio::test]
    async fn test_create_meal_is_active() {
        let mut mocks = Mocks::new();
        mocks
            .meals
            .expect_get_meal_by_sku()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .meals
            .expect_create_meal()
            .withf(|meal| meal.status == MealStatus::Active)
            .times(1)
            .returning(|meal| Box::pin(async move { Ok(meal) }));
        let service = mocks.into_service();

        let meal = service
            .create_meal(admin(), attributes("MEAL-1"))
            .await
            .unwrap();

        assert_eq!(meal.status, MealStatus::Active);
    }

    #[tokio::test]
    async fn test_update_meal_rejects_sku_of_another_meal() {
        let current = Meal::new(attributes("MEAL-1"));
        let other = Meal::new(attributes("MEAL-2"));
        let current_id = current.id;

        let mut mocks = Mocks::new();
        mocks
            .meals
            .expect_get_meal_by_id()
            .returning(move |_| {
                let current = current.clone();
                Box::pin(async move { Ok(Some(current)) })
            });
        mocks
            .meals
            .expect_get_meal_by_sku()
            .returning(move |_| {
                let other = other.clone();
                Box::pin(async move { Ok(Some(other)) })
            });
        mocks.meals.expect_update_meal().never();
        let service = mocks.into_service();

        let result = service
            .update_meal(
                admin(),
                UpdateMealInput {
                    meal_id: current_id,
                    attributes: attributes("MEAL-2"),
                    status: MealStatus::Inactive,
                },
            )
            .await;

        let Err(CoreError::Validation(errors)) = result else {
            panic!("expected validation error");
        };
        assert!(errors.contains("sku"));
    }
}
