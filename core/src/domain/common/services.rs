use crate::domain::{
    authentication::ports::TokenVerifier,
    category::ports::CategoryRepository,
    common::policies::PantryPolicy,
    health::ports::HealthCheckRepository,
    meal::ports::MealRepository,
    meal_plan::ports::MealPlanRepository,
    media::ports::ObjectStoragePort,
    order::ports::OrderRepository,
    product::ports::ProductRepository,
};

/// Implements every service trait over a set of repository adapters.
#[derive(Clone)]
pub struct Service<CA, PR, ME, MP, OR, OS, TV, HC>
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
    pub(crate) category_repository: CA,
    pub(crate) product_repository: PR,
    pub(crate) meal_repository: ME,
    pub(crate) meal_plan_repository: MP,
    pub(crate) order_repository: OR,
    pub(crate) object_storage: OS,
    pub(crate) token_verifier: TV,
    pub(crate) health_check_repository: HC,
    pub(crate) policy: PantryPolicy,
}

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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        category_repository: CA,
        product_repository: PR,
        meal_repository: ME,
        meal_plan_repository: MP,
        order_repository: OR,
        object_storage: OS,
        token_verifier: TV,
        health_check_repository: HC,
    ) -> Self {
        Self {
            category_repository,
            product_repository,
            meal_repository,
            meal_plan_repository,
            order_repository,
            object_storage,
            token_verifier,
            health_check_repository,
            policy: PantryPolicy,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use uuid::Uuid;

    use super::Service;
    use crate::domain::{
        authentication::{
            ports::MockTokenVerifier,
            value_objects::{Identity, Role},
        },
        category::ports::MockCategoryRepository,
        health::ports::MockHealthCheckRepository,
        meal::ports::MockMealRepository,
        meal_plan::ports::MockMealPlanRepository,
        media::ports::MockObjectStoragePort,
        order::ports::MockOrderRepository,
        product::ports::MockProductRepository,
    };

    pub type MockedService = Service<
        MockCategoryRepository,
        MockProductRepository,
        MockMealRepository,
        MockMealPlanRepository,
        MockOrderRepository,
        MockObjectStoragePort,
        MockTokenVerifier,
        MockHealthCheckRepository,
    >;

    /// One mock per port; set expectations, then call [`Mocks::into_service`].
    pub struct Mocks {
        pub categories: MockCategoryRepository,
        pub products: MockProductRepository,
        pub meals: MockMealRepository,
        pub meal_plans: MockMealPlanRepository,
        pub orders: MockOrderRepository,
        pub storage: MockObjectStoragePort,
        pub tokens: MockTokenVerifier,
        pub health: MockHealthCheckRepository,
    }

    impl Mocks {
        pub fn new() -> Self {
            Self {
                categories: MockCategoryRepository::new(),
                products: MockProductRepository::new(),
                meals: MockMealRepository::new(),
                meal_plans: MockMealPlanRepository::new(),
                orders: MockOrderRepository::new(),
                storage: MockObjectStoragePort::new(),
                tokens: MockTokenVerifier::new(),
                health: MockHealthCheckRepository::new(),
            }
        }

        pub fn into_service(self) -> MockedService {
            Service::new(
                self.categories,
                self.products,
                self.meals,
                self.meal_plans,
                self.orders,
                self.storage,
                self.tokens,
                self.health,
            )
        }
    }

    pub fn admin() -> Identity {
        Identity::new(
            Uuid::new_v4(),
            "Admin".to_string(),
            Some("admin@pantry.test".to_string()),
            vec![Role::Admin],
        )
    }

    pub fn customer() -> Identity {
        Identity::new(
            Uuid::new_v4(),
            "Jane Doe".to_string(),
            Some("jane@pantry.test".to_string()),
            vec![Role::Customer],
        )
    }
}
