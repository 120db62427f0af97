use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
pub struct DatabaseHealthStatus {
    pub is_healthy: bool,
    pub response_time_ms: u64,
    pub connection_pool_status: String,
    pub error_message: Option<String>,
}
