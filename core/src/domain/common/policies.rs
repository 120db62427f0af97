use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
};

/// Role-based policy over the caller's [`Identity`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PantryPolicy;

pub trait Policy: Send + Sync {
    fn is_admin(&self, identity: &Identity) -> bool;
}

impl Policy for PantryPolicy {
    fn is_admin(&self, identity: &Identity) -> bool {
        identity.is_admin()
    }
}

/// Permission to create, update and delete catalog records.
pub trait CatalogPolicy: Send + Sync {
    fn can_manage_catalog(&self, identity: &Identity) -> Result<bool, CoreError>;
}

impl CatalogPolicy for PantryPolicy {
    fn can_manage_catalog(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(self.is_admin(identity))
    }
}

pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::authentication::value_objects::Role;

    #[test]
    fn test_ensure_policy() {
        assert!(ensure_policy(Ok(true), "nope").is_ok());
        assert!(matches!(
            ensure_policy(Ok(false), "nope"),
            Err(CoreError::Forbidden(message)) if message == "nope"
        ));
        assert!(matches!(
            ensure_policy(Err(CoreError::InternalServerError), "nope"),
            Err(CoreError::InternalServerError)
        ));
    }

    #[test]
    fn test_only_admins_manage_catalog() {
        let admin = Identity::new(Uuid::nil(), "admin".into(), None, vec![Role::Admin]);
        let customer = Identity::new(Uuid::nil(), "c".into(), None, vec![Role::Customer]);

        assert!(PantryPolicy.can_manage_catalog(&admin).unwrap());
        assert!(!PantryPolicy.can_manage_catalog(&customer).unwrap());
    }
}
