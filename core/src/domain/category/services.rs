use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    category::{
        entities::Category,
        ports::{CategoryRepository, CategoryService},
        value_objects::{CreateCategoryInput, UpdateCategoryInput},
    },
    common::{
        entities::app_errors::CoreError,
        policies::{CatalogPolicy, ensure_policy},
        services::Service,
    },
    health::ports::HealthCheckRepository,
    meal::ports::MealRepository,
    meal_plan::ports::MealPlanRepository,
    media::ports::ObjectStoragePort,
    order::ports::OrderRepository,
    product::ports::ProductRepository,
};

impl<CA, PR, ME, MP, OR, OS, TV, HC> CategoryService for Service<CA, PR, ME, MP, OR, OS, TV, HC>
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
    async fn get_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.category_repository.fetch_categories().await
    }

    async fn get_category(&self, category_id: Uuid) -> Result<Category, CoreError> {
        self.category_repository
            .get_category_by_id(category_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_shop_categories(&self) -> Result<Vec<Category>, CoreError> {
        self.category_repository
            .fetch_categories_with_active_products()
            .await
    }

    #[instrument(skip(self, identity), fields(name = %input.name))]
    async fn create_category(
        &self,
        identity: Identity,
        input: CreateCategoryInput,
    ) -> Result<Category, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        let category = Category::new(input.name, input.slug, input.is_active.unwrap_or(true));

        self.category_repository.create_category(category).await
    }

    #[instrument(skip(self, identity), fields(category_id = %input.category_id))]
    async fn update_category(
        &self,
        identity: Identity,
        input: UpdateCategoryInput,
    ) -> Result<Category, CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        let mut category = self
            .category_repository
            .get_category_by_id(input.category_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        category.update(input.name, input.slug, input.is_active);

        self.category_repository.update_category(category).await
    }

    #[instrument(skip(self, identity))]
    async fn delete_category(&self, identity: Identity, category_id: Uuid) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_catalog(&identity),
            "insufficient permissions",
        )?;

        self.category_repository
            .get_category_by_id(category_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.category_repository.delete_category(category_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::services::test_support::{Mocks, admin, customer};

    #[tokio::test]
    async fn test_create_category_requires_admin() {
        let mut mocks = Mocks::new();
        mocks.categories.expect_create_category().never();
        let service = mocks.into_service();

        let result = service
            .create_category(
                customer(),
                CreateCategoryInput {
                    name: "Cups".to_string(),
                    slug: None,
                    is_active: None,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_create_category_defaults_to_active() {
        let mut mocks = Mocks::new();
        mocks
            .categories
            .expect_create_category()
            .withf(|category| category.is_active && category.slug == "paper-cups")
            .times(1)
            .returning(|category| Box::pin(async move { Ok(category) }));
        let service = mocks.into_service();

        let category = service
            .create_category(
                admin(),
                CreateCategoryInput {
                    name: "Paper Cups".to_string(),
                    slug: None,
                    is_active: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(category.name, "Paper Cups");
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let mut mocks = Mocks::new();
        mocks
            .categories
            .expect_get_category_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks.categories.expect_update_category().never();
        let service = mocks.into_service();

        let result = service
            .update_category(
                admin(),
                UpdateCategoryInput {
                    category_id: Uuid::new_v4(),
                    name: "Plates".to_string(),
                    slug: None,
                    is_active: None,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }
}
