use crate::domain::{
    authentication::entities::{AuthorizeRequestInput, AuthorizeRequestOutput, JwtClaim},
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<AuthorizeRequestOutput, CoreError>> + Send;
}

/// Verifies bearer tokens issued by the external identity provider.
#[cfg_attr(test, mockall::automock)]
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}
