use uuid::Uuid;

use crate::domain::authentication::entities::JwtClaim;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn from_claim(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            _ => Role::Customer,
        }
    }
}

/// The authenticated caller, passed explicitly into every service operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    id: Uuid,
    name: String,
    email: Option<String>,
    roles: Vec<Role>,
}

impl Identity {
    pub fn new(id: Uuid, name: String, email: Option<String>, roles: Vec<Role>) -> Self {
        Self {
            id,
            name,
            email,
            roles,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }
}

impl From<JwtClaim> for Identity {
    fn from(claims: JwtClaim) -> Self {
        let roles = claims.roles.iter().map(|r| Role::from_claim(r)).collect();
        Identity::new(claims.sub, claims.name, claims.email, roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_claims() {
        let claims = JwtClaim {
            sub: Uuid::nil(),
            name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
            roles: vec!["ADMIN".to_string(), "customer".to_string()],
            exp: 0,
            iat: None,
        };

        let identity = Identity::from(claims);
        assert!(identity.is_admin());
        assert_eq!(identity.name(), "Ada");
        assert_eq!(identity.email(), Some("ada@example.com"));
    }

    #[test]
    fn test_customer_is_not_admin() {
        let identity = Identity::new(Uuid::nil(), "Bob".to_string(), None, vec![Role::Customer]);
        assert!(!identity.is_admin());
    }
}
