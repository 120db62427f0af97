use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        policies::{PantryPolicy, Policy},
    },
    order::{entities::Order, ports::OrderPolicy},
};

impl OrderPolicy for PantryPolicy {
    /// Admins see every order; customers only the ones they placed.
    fn can_view_order(&self, identity: &Identity, order: &Order) -> Result<bool, CoreError> {
        Ok(self.is_admin(identity) || order.created_by == identity.id())
    }

    fn can_list_orders(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(self.is_admin(identity))
    }

    fn can_update_order_status(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(self.is_admin(identity))
    }

    fn can_validate_order(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(self.is_admin(identity))
    }
}
