use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    category::ports::CategoryRepository,
    common::{
        entities::app_errors::CoreError,
        policies::ensure_policy,
        services::Service,
        value_objects::Paginated,
    },
    health::ports::HealthCheckRepository,
    meal::ports::MealRepository,
    meal_plan::ports::MealPlanRepository,
    media::ports::ObjectStoragePort,
    order::{
        entities::{Order, Subscription},
        ports::{OrderPolicy, OrderRepository, OrderService},
        pricing::{CatalogSnapshot, price_order},
        validation::{Classified, check_quoted_total, classify, validate_request},
        value_objects::{
            CreateOrderInput, GetOrdersFilter, OrderRequest, UpdateOrderStatusInput,
            ValidateOrderInput,
        },
    },
    product::ports::ProductRepository,
};

impl<CA, PR, ME, MP, OR, OS, TV, HC> Service<CA, PR, ME, MP, OR, OS, TV, HC>
where
    CA: CategoryRepository,
    PR: ProductRepository,
    ME: MealRepository,
    MP: MealPlanRepository,
    OR: OrderRepository,
    OS: ObjectStoragePort,
    TV: TokenVerifier,
    HC: HealthCheckRepository,
{
    /// Loads every non-deleted catalog record the request references.
    async fn load_catalog_snapshot(
        &self,
        request: &OrderRequest,
    ) -> Result<CatalogSnapshot, CoreError> {
        let product_ids = request.product_ids();
        let products = if product_ids.is_empty() {
            Vec::new()
        } else {
            self.product_repository
                .get_products_by_ids(product_ids)
                .await?
        };

        let meal_plans = match request.meal_plan_id() {
            Some(meal_plan_id) => self
                .meal_plan_repository
                .get_meal_plan_by_id(meal_plan_id)
                .await?
                .into_iter()
                .collect(),
            None => Vec::new(),
        };

        let meal_ids = request.meal_ids();
        let meals = if meal_ids.is_empty() {
            Vec::new()
        } else {
            self.meal_repository.find_existing_meal_ids(meal_ids).await?
        };

        Ok(CatalogSnapshot::new(products, meal_plans, meals))
    }

    async fn find_order(&self, order_id: Uuid) -> Result<Order, CoreError> {
        self.order_repository
            .get_order_by_id(order_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

impl<CA, PR, ME, MP, OR, OS, TV, HC> OrderService for Service<CA, PR, ME, MP, OR, OS, TV, HC>
where
    CA: CategoryRepository,
    PR: ProductRepository,
    ME: MealRepository,
    MP: MealPlanRepository,
    OR: OrderRepository,
    OS: ObjectStoragePort,
    TV: TokenVerifier,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn create_order(
        &self,
        identity: Identity,
        input: CreateOrderInput,
    ) -> Result<Order, CoreError> {
        let mut errors = input.body_errors;
        let Classified {
            request,
            errors: shape_errors,
        } = classify(input.draft);
        errors.merge(shape_errors);
        let Some(request) = request else {
            return Err(CoreError::Validation(errors));
        };

        let catalog = self.load_catalog_snapshot(&request).await?;
        let today = Utc::now().date_naive();
        errors.merge(validate_request(&request, &catalog, today));
        errors.into_result()?;

        let priced = price_order(&request, &catalog)?;
        check_quoted_total(&request, &priced).into_result()?;

        let subscription = match request {
            OrderRequest::Subscription(subscription) => Some(Subscription {
                delivery_days: subscription.delivery_days,
                menu_selections: subscription.menu_selections,
                preferences: subscription.preferences,
                delivery_address: subscription.delivery_address,
                quoted_total: subscription.total_price,
            }),
            _ => None,
        };

        let order = Order::new(input.client_info, priced, subscription, identity.id());
        let order = self.order_repository.create_order(order).await?;

        info!(
            order_id = %order.id,
            order_type = order.order_type.as_str(),
            total = %order.total,
            "order created"
        );

        Ok(order)
    }

    async fn get_order(&self, identity: Identity, order_id: Uuid) -> Result<Order, CoreError> {
        let order = self.find_order(order_id).await?;

        ensure_policy(
            self.policy.can_view_order(&identity, &order),
            "insufficient permissions",
        )?;

        Ok(order)
    }

    #[instrument(skip(self, identity))]
    async fn get_orders(
        &self,
        identity: Identity,
        filter: GetOrdersFilter,
    ) -> Result<Paginated<Order>, CoreError> {
        ensure_policy(
            self.policy.can_list_orders(&identity),
            "insufficient permissions",
        )?;

        filter
            .page
            .validate()
            .map_err(|_| CoreError::InvalidPagination)?;

        let page = filter.page;
        let (items, count) = self.order_repository.fetch_orders(filter).await?;

        Ok(Paginated {
            items,
            offset: page.offset,
            limit: page.limit,
            count,
        })
    }

    #[instrument(skip(self, identity, input), fields(order_id = %input.order_id, status = %input.status))]
    async fn update_order_status(
        &self,
        identity: Identity,
        input: UpdateOrderStatusInput,
    ) -> Result<Order, CoreError> {
        ensure_policy(
            self.policy.can_update_order_status(&identity),
            "insufficient permissions",
        )?;

        let mut order = self.find_order(input.order_id).await?;
        let previous = order.status;
        order.transition(input.status, input.comment, &identity)?;

        self.order_repository.update_order(order, previous).await
    }

    #[instrument(skip(self, identity, input), fields(order_id = %input.order_id))]
    async fn validate_order(
        &self,
        identity: Identity,
        input: ValidateOrderInput,
    ) -> Result<Order, CoreError> {
        ensure_policy(
            self.policy.can_validate_order(&identity),
            "insufficient permissions",
        )?;

        let mut order = self.find_order(input.order_id).await?;
        let previous = order.status;
        order.validate(input.comment, &identity)?;

        self.order_repository.update_order(order, previous).await
    }
}
