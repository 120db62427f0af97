use std::sync::Arc;

use axum_test::TestServer;
use chrono::Utc;
use clap::Parser;
use jsonwebtoken::{EncodingKey, Header, encode};
use pantry_api::{
    application::http::server::{app_state::AppState, http_server::api_routes},
    args::Args,
};
use pantry_core::{
    application::build_service, domain::authentication::entities::JwtClaim,
    domain::common::PantryConfig,
};
use sea_orm::{DatabaseBackend, MockDatabase};
use test_context::AsyncTestContext;
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-secret";

/// An API server over a mock database. Each test queues the rows its
/// repository calls will read.
pub struct ApiContext {
    pub admin_token: String,
    pub customer_token: String,
}

impl ApiContext {
    pub fn server(&self, db: MockDatabase) -> TestServer {
        let args = Arc::new(Args::parse_from([
            "pantry-api",
            "--jwt-secret",
            JWT_SECRET,
        ]));
        let config = PantryConfig::from(args.as_ref().clone());
        let service = build_service(db.into_connection(), config);
        let state = AppState::new(args, service);

        TestServer::new(api_routes(state.clone()).with_state(state))
            .expect("failed to start test server")
    }

    pub fn empty_server(&self) -> TestServer {
        self.server(MockDatabase::new(DatabaseBackend::Postgres))
    }
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        Self {
            admin_token: token(vec!["admin".to_string()]),
            customer_token: token(vec![]),
        }
    }
}

pub fn token(roles: Vec<String>) -> String {
    let claims = JwtClaim {
        sub: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: Some("test@example.com".to_string()),
        roles,
        exp: Utc::now().timestamp() + 3600,
        iat: Some(Utc::now().timestamp()),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("failed to encode token")
}

pub fn bearer(token: &str) -> axum::http::HeaderValue {
    axum::http::HeaderValue::from_str(&format!("Bearer {token}")).expect("invalid header value")
}
