use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        let start = Instant::now();

        self.db.execute_unprepared("SELECT 1").await.map_err(|e| {
            error!("Health check query failed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(start.elapsed().as_millis() as u64)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let start = Instant::now();
        let result = self.db.ping().await;
        let response_time_ms = start.elapsed().as_millis() as u64;

        let status = match result {
            Ok(()) => DatabaseHealthStatus {
                is_healthy: true,
                response_time_ms,
                connection_pool_status: "connected".to_string(),
                error_message: None,
            },
            Err(e) => {
                error!("Database readiness check failed: {}", e);
                DatabaseHealthStatus {
                    is_healthy: false,
                    response_time_ms,
                    connection_pool_status: "disconnected".to_string(),
                    error_message: Some(e.to_string()),
                }
            }
        };

        Ok(status)
    }
}
