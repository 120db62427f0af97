use tracing::warn;

use crate::domain::{
    authentication::{
        entities::{AuthorizeRequestInput, AuthorizeRequestOutput},
        ports::{AuthService, TokenVerifier},
        value_objects::Identity,
    },
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    meal::ports::MealRepository,
    meal_plan::ports::MealPlanRepository,
    media::ports::ObjectStoragePort,
    order::ports::OrderRepository,
    product::ports::ProductRepository,
};

impl<CA, PR, ME, MP, OR, OS, TV, HC> AuthService for Service<CA, PR, ME, MP, OR, OS, TV, HC>
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
    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claims = self.token_verifier.verify(&input.token).map_err(|e| {
            warn!("rejected bearer token: {}", e);
            e
        })?;

        Ok(AuthorizeRequestOutput {
            identity: Identity::from(claims),
        })
    }
}
