use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use tracing::debug;

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenVerifier},
    common::entities::app_errors::CoreError,
};

/// Verifies HS256 tokens signed with the shared secret of the identity provider.
#[derive(Clone)]
pub struct JwtTokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        decode::<JwtClaim>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("token rejected: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => CoreError::TokenExpired,
                    _ => CoreError::InvalidToken,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    use super::*;

    fn token(secret: &str, exp: i64) -> String {
        let claims = JwtClaim {
            sub: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: Some("alice@example.com".to_string()),
            roles: vec!["admin".to_string()],
            exp,
            iat: None,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_yields_claims() {
        let verifier = JwtTokenVerifier::new("secret");
        let claims = verifier
            .verify(&token("secret", Utc::now().timestamp() + 3600))
            .unwrap();

        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.roles, vec!["admin".to_string()]);
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let verifier = JwtTokenVerifier::new("secret");
        let result = verifier.verify(&token("secret", Utc::now().timestamp() - 3600));

        assert!(matches!(result, Err(CoreError::TokenExpired)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let verifier = JwtTokenVerifier::new("secret");
        let result = verifier.verify(&token("other", Utc::now().timestamp() + 3600));

        assert!(matches!(result, Err(CoreError::InvalidToken)));
    }
}
