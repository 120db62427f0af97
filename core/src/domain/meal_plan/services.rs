use std::collections::{HashMap, HashSet};

use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    category::ports::CategoryRepository,
    common::{
        entities::{app_errors::CoreError, field_errors::FieldErrors},
        policies::{CatalogPolicy, ensure_policy},
        services::Service,
    },
    health::ports::HealthCheckRepository,
    meal::ports::MealRepository,
    meal_plan::{
        entities::MealPlan,
        ports::{MealPlanRepository, MealPlanService},
        value_objects::{BuildMealPlanInput, MealPlanAttributes, UpdateMealPlanInput},
    },
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
    /// Price bounds plus name and sku uniqueness, ignoring `current`.
    async fn check_meal_plan_attributes(
        &self,
        attributes: &MealPlanAttributes,
        current: Option<Uuid>,
    ) -> Result<(), CoreError> {
        let mut errors = attributes.prices.validate();

        if let Some(existing) = self
            .meal_plan_repository
            .get_meal_plan_by_name(attributes.name.clone())
            .await?
            && Some(existing.id) != current
        {
            errors.add("name", "The name has already been taken.");
        }

        if let Some(existing) = self
            .meal_plan_repository
            .get_meal_plan_by_sku(attributes.sku.clone())
            .await?
            && Some(existing.id) != current
        {
            errors.add("sku", "The sku has already been taken.");
        }

        errors.into_result().map_err(CoreError::from)
    }
}

impl<CA, PR, ME, MP, OR, OS, TV, HC> MealPlanService for Service<CA, PR, ME, MP, OR, OS, TV, HC>
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
    async fn get_meal_plans(&self) -> Result<Vec<MealPlan>, CoreError> {
        self.meal_plan_repository.fetch_meal_plans().await
    }

    async fn get_meal_plan(&self, meal_plan_id: Uuid) -> Result<MealPlan, CoreError> {
        self.meal_plan_repository
            .get_meal_plan_by_id(meal_plan_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_home_meal_plans(&self) -> Result<Vec<MealPlan>, CoreError> {
        self.meal_plan_repository.fetch_active_meal_plans().await
    }

    #[instrument(skip(self, identity), fields(sku = %input.sku))]
    async fn create_meal_plan(
        &self,
        identity: Identity,
        input: MealPlanAttributes,
    ) -> Result<MealPlan, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        self.check_meal_plan_attributes(&input, None).await?;

        self.meal_plan_repository
            .create_meal_plan(MealPlan::new(input))
            .await
    }

    #[instrument(skip(self, identity), fields(meal_plan_id = %input.meal_plan_id))]
    async fn update_meal_plan(
        &self,
        identity: Identity,
        input: UpdateMealPlanInput,
    ) -> Result<MealPlan, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        let mut meal_plan = self
            .meal_plan_repository
            .get_meal_plan_by_id(input.meal_plan_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.check_meal_plan_attributes(&input.attributes, Some(meal_plan.id))
            .await?;

        meal_plan.update(input.attributes);
        self.meal_plan_repository.update_meal_plan(meal_plan).await
    }

    #[instrument(skip(self, identity, input), fields(meal_plan_id = %input.meal_plan_id))]
    async fn build_meal_plan(
        &self,
        identity: Identity,
        input: BuildMealPlanInput,
    ) -> Result<MealPlan, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        let mut meal_plan = self
            .meal_plan_repository
            .get_meal_plan_by_id(input.meal_plan_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let requested: Vec<Uuid> = input
            .menu
            .meal_ids()
            .map(|(_, id)| *id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let existing: HashSet<Uuid> = self
            .meal_repository
            .find_existing_meal_ids(requested)
            .await?
            .into_iter()
            .collect();

        let mut errors = FieldErrors::new();
        let mut positions: HashMap<_, usize> = HashMap::new();
        for (meal_type, meal_id) in input.menu.meal_ids() {
            let index = positions.entry(meal_type).or_default();
            if !existing.contains(meal_id) {
                errors.add(
                    format!("meals.{meal_type}.{index}"),
                    "The selected meal does not exist.",
                );
            }
            *index += 1;
        }
        errors.into_result()?;

        meal_plan.build(input.menu);
        self.meal_plan_repository.update_meal_plan(meal_plan).await
    }

    #[instrument(skip(self, identity))]
    async fn delete_meal_plan(
        &self,
        identity: Identity,
        meal_plan_id: Uuid,
    ) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        self.meal_plan_repository
            .get_meal_plan_by_id(meal_plan_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.meal_plan_repository.delete_meal_plan(meal_plan_id).await
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{
        common::services::test_support::{Mocks, admin, customer},
        meal_plan::value_objects::{MealPlanMenu, MealPlanPrices, MealPlanStatus},
    };

    fn attributes() -> MealPlanAttributes {
        MealPlanAttributes {
            name: "Balanced".to_string(),
            sku: "MP-BAL".to_string(),
            description: "Three meals a day".to_string(),
            image: None,
            prices: MealPlanPrices {
                breakfast_price_per_day: Decimal::from(3),
                lunch_price_per_day: Decimal::from(4),
                dinner_price_per_day: Decimal::from(5),
                snack_price_per_day: Decimal::from(2),
            },
        }
    }

    #[tokio::test]
    async fn test_create_meal_plan_starts_inactive() {
        let mut mocks = Mocks::new();
        mocks
            .meal_plans
            .expect_get_meal_plan_by_name()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .meal_plans
            .expect_get_meal_plan_by_sku()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .meal_plans
            .expect_create_meal_plan()
            .times(1)
            .returning(|plan| Box::pin(async move { Ok(plan) }));
        let service = mocks.into_service();

        let plan = service
            .create_meal_plan(admin(), attributes())
            .await
            .unwrap();

        assert_eq!(plan.status, MealPlanStatus::Inactive);
    }

    #[tokio::test]
    async fn test_build_rejects_unknown_meals() {
        let plan = MealPlan::new(attributes());
        let plan_id = plan.id;
        let known = Uuid::new_v4();
        let unknown = Uuid::new_v4();

        let mut mocks = Mocks::new();
        mocks
            .meal_plans
            .expect_get_meal_plan_by_id()
            .returning(move |_| {
                let plan = plan.clone();
                Box::pin(async move { Ok(Some(plan)) })
            });
        mocks
            .meals
            .expect_find_existing_meal_ids()
            .returning(move |_| Box::pin(async move { Ok(vec![known]) }));
        mocks.meal_plans.expect_update_meal_plan().never();
        let service = mocks.into_service();

        let result = service
            .build_meal_plan(
                admin(),
                BuildMealPlanInput {
                    meal_plan_id: plan_id,
                    menu: MealPlanMenu {
                        breakfast: vec![known],
                        lunch: vec![known, unknown],
                        dinner: vec![],
                    },
                },
            )
            .await;

        let Err(CoreError::Validation(errors)) = result else {
            panic!("expected validation error");
        };
        assert!(errors.contains("meals.lunch.1"));
        assert_eq!(errors.len(), 1);
    }

    #[tokio::test]
    async fn test_build_activates_plan() {
        let plan = MealPlan::new(attributes());
        let plan_id = plan.id;
        let meal = Uuid::new_v4();

        let mut mocks = Mocks::new();
        mocks
            .meal_plans
            .expect_get_meal_plan_by_id()
            .returning(move |_| {
                let plan = plan.clone();
                Box::pin(async move { Ok(Some(plan)) })
            });
        mocks
            .meals
            .expect_find_existing_meal_ids()
            .returning(move |_| Box::pin(async move { Ok(vec![meal]) }));
        mocks
            .meal_plans
            .expect_update_meal_plan()
            .times(1)
            .returning(|plan| Box::pin(async move { Ok(plan) }));
        let service = mocks.into_service();

        let built = service
            .build_meal_plan(
                admin(),
                BuildMealPlanInput {
                    meal_plan_id: plan_id,
                    menu: MealPlanMenu {
                        breakfast: vec![meal],
                        lunch: vec![meal],
                        dinner: vec![meal],
                    },
                },
            )
            .await
            .unwrap();

        assert_eq!(built.status, MealPlanStatus::Active);
    }

    #[tokio::test]
    async fn test_customer_cannot_delete_meal_plan() {
        let service = Mocks::new().into_service();
        let result = service.delete_meal_plan(customer(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }
}
