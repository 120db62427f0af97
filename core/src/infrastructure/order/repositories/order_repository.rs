use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::{error, warn};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        order::{
            entities::Order, ports::OrderRepository, status::OrderStatus,
            value_objects::GetOrdersFilter,
        },
    },
    entity::orders::{ActiveModel as OrderActiveModel, Column as OrderColumn, Entity as OrderEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pub db: DatabaseConnection,
}

impl PostgresOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl OrderRepository for PostgresOrderRepository {
    async fn create_order(&self, order: Order) -> Result<Order, CoreError> {
        let model = OrderEntity::insert(OrderActiveModel::try_from(order)?)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create order: {}", e);
                CoreError::InternalServerError
            })?;

        Order::try_from(model)
    }

    async fn get_order_by_id(&self, order_id: Uuid) -> Result<Option<Order>, CoreError> {
        OrderEntity::find_by_id(order_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get order by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Order::try_from)
            .transpose()
    }

    async fn fetch_orders(&self, filter: GetOrdersFilter) -> Result<(Vec<Order>, u64), CoreError> {
        let mut query = OrderEntity::find();

        if let Some(status) = filter.status {
            query = query.filter(OrderColumn::Status.eq(status.as_str()));
        }
        if let Some(email) = filter.client_email {
            query = query.filter(OrderColumn::ClientEmail.eq(email));
        }

        let total = query.clone().count(&self.db).await.map_err(|e| {
            error!("Failed to count orders: {}", e);
            CoreError::InternalServerError
        })?;

        let orders = query
            .order_by_desc(OrderColumn::CreatedAt)
            .offset(filter.page.offset)
            .limit(filter.page.limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch orders: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Order::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((orders, total))
    }

    async fn update_order(
        &self,
        order: Order,
        expected_status: OrderStatus,
    ) -> Result<Order, CoreError> {
        let order_id = order.id;
        let updated = OrderEntity::update_many()
            .set(OrderActiveModel::try_from(order)?)
            .filter(OrderColumn::Id.eq(order_id))
            .filter(OrderColumn::Status.eq(expected_status.as_str()))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update order: {}", e);
                CoreError::InternalServerError
            })?;

        if let Some(model) = updated.into_iter().next() {
            return Order::try_from(model);
        }

        let current = self
            .get_order_by_id(order_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        warn!(
            order_id = %order_id,
            expected = %expected_status,
            current = %current.status,
            "order status changed concurrently"
        );

        Err(CoreError::Conflict {
            message: format!(
                "The order status changed to {} while this update was in progress.",
                current.status
            ),
            current_status: current.status.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, TryIntoModel};

    use super::*;
    use crate::{
        domain::{
            common::services::test_support::admin,
            order::{
                pricing::PricedOrder,
                value_objects::{ClientInfo, OrderType},
            },
        },
        entity::orders::Model as OrderModel,
    };

    fn order() -> Order {
        let priced = PricedOrder {
            order_type: OrderType::Products,
            line_items: vec![],
            subtotal: Default::default(),
            tax: Default::default(),
            total: Default::default(),
            meal_plan_id: None,
        };
        let client = ClientInfo {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "0600000000".to_string(),
        };

        Order::new(client, priced, None, Uuid::new_v4())
    }

    fn row(order: &Order) -> OrderModel {
        OrderActiveModel::try_from(order.clone())
            .unwrap()
            .try_into_model()
            .unwrap()
    }

    #[tokio::test]
    async fn test_update_applies_when_status_is_unchanged() {
        let mut order = order();
        order
            .transition(OrderStatus::Confirmed, "paid".to_string(), &admin())
            .unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(&order)]])
            .into_connection();
        let repository = PostgresOrderRepository::new(db);

        let stored = repository
            .update_order(order.clone(), OrderStatus::Pending)
            .await
            .unwrap();

        assert_eq!(stored, order);
    }

    #[tokio::test]
    async fn test_update_after_concurrent_change_is_a_conflict() {
        let mut ours = order();
        let mut theirs = ours.clone();
        ours.transition(OrderStatus::Confirmed, "paid".to_string(), &admin())
            .unwrap();
        theirs
            .transition(OrderStatus::Cancelled, "out of stock".to_string(), &admin())
            .unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<OrderModel>::new(), vec![row(&theirs)]])
            .into_connection();
        let repository = PostgresOrderRepository::new(db);

        let result = repository.update_order(ours, OrderStatus::Pending).await;

        assert!(matches!(
            result,
            Err(CoreError::Conflict { current_status, .. }) if current_status == "Cancelled"
        ));
    }
}
