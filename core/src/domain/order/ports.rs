use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, value_objects::Paginated},
    order::{
        entities::Order,
        status::OrderStatus,
        value_objects::{
            CreateOrderInput, GetOrdersFilter, UpdateOrderStatusInput, ValidateOrderInput,
        },
    },
};

pub trait OrderService: Send + Sync {
    fn create_order(
        &self,
        identity: Identity,
        input: CreateOrderInput,
    ) -> impl Future<Output = Result<Order, CoreError>> + Send;

    fn get_order(
        &self,
        identity: Identity,
        order_id: Uuid,
    ) -> impl Future<Output = Result<Order, CoreError>> + Send;

    fn get_orders(
        &self,
        identity: Identity,
        filter: GetOrdersFilter,
    ) -> impl Future<Output = Result<Paginated<Order>, CoreError>> + Send;

    fn update_order_status(
        &self,
        identity: Identity,
        input: UpdateOrderStatusInput,
    ) -> impl Future<Output = Result<Order, CoreError>> + Send;

    fn validate_order(
        &self,
        identity: Identity,
        input: ValidateOrderInput,
    ) -> impl Future<Output = Result<Order, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait OrderRepository: Send + Sync {
    fn create_order(&self, order: Order) -> impl Future<Output = Result<Order, CoreError>> + Send;

    fn get_order_by_id(
        &self,
        order_id: Uuid,
    ) -> impl Future<Output = Result<Option<Order>, CoreError>> + Send;

    /// Matching orders, newest first, and the total number of matches.
    fn fetch_orders(
        &self,
        filter: GetOrdersFilter,
    ) -> impl Future<Output = Result<(Vec<Order>, u64), CoreError>> + Send;

    /// Stores `order` only if the stored row still has `expected_status`;
    /// a row moved on by another writer is a [`CoreError::Conflict`].
    fn update_order(
        &self,
        order: Order,
        expected_status: OrderStatus,
    ) -> impl Future<Output = Result<Order, CoreError>> + Send;
}

pub trait OrderPolicy: Send + Sync {
    fn can_view_order(&self, identity: &Identity, order: &Order) -> Result<bool, CoreError>;

    fn can_list_orders(&self, identity: &Identity) -> Result<bool, CoreError>;

    fn can_update_order_status(&self, identity: &Identity) -> Result<bool, CoreError>;

    fn can_validate_order(&self, identity: &Identity) -> Result<bool, CoreError>;
}
