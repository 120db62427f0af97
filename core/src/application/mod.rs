use crate::{
    domain::common::{PantryConfig, services::Service},
    infrastructure::{
        auth::jwt::JwtTokenVerifier,
        category::repositories::category_repository::PostgresCategoryRepository,
        db::postgres::Postgres,
        health::repositories::health_check_repository::PostgresHealthCheckRepository,
        meal::repositories::meal_repository::PostgresMealRepository,
        meal_plan::repositories::meal_plan_repository::PostgresMealPlanRepository,
        object_storage::s3::S3ObjectStorage,
        order::repositories::order_repository::PostgresOrderRepository,
        product::repositories::product_repository::PostgresProductRepository,
        seed::seed_catalog,
    },
};

pub type PantryService = Service<
    PostgresCategoryRepository,
    PostgresProductRepository,
    PostgresMealRepository,
    PostgresMealPlanRepository,
    PostgresOrderRepository,
    S3ObjectStorage,
    JwtTokenVerifier,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: PantryConfig) -> Result<PantryService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;

    Ok(build_service(postgres.get_db(), config))
}

/// Wires the adapters over an already open connection.
pub fn build_service(db: sea_orm::DatabaseConnection, config: PantryConfig) -> PantryService {
    Service::new(
        PostgresCategoryRepository::new(db.clone()),
        PostgresProductRepository::new(db.clone()),
        PostgresMealRepository::new(db.clone()),
        PostgresMealPlanRepository::new(db.clone()),
        PostgresOrderRepository::new(db.clone()),
        S3ObjectStorage::new(config.object_storage),
        JwtTokenVerifier::new(&config.auth.jwt_secret),
        PostgresHealthCheckRepository::new(db),
    )
}

impl PantryService {
    /// Seeds the sample catalog; returns the number of inserted products.
    pub async fn seed(&self) -> Result<usize, anyhow::Error> {
        let inserted = seed_catalog(&self.category_repository, &self.product_repository).await?;
        Ok(inserted)
    }
}
