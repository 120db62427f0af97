use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::authentication::value_objects::Identity;

/// Claims carried by the bearer tokens the identity provider issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
}

pub struct AuthorizeRequestInput {
    pub token: String,
}

pub struct AuthorizeRequestOutput {
    pub identity: Identity,
}
