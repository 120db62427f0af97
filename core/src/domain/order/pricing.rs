//! Order pricing over a catalog snapshot.
//!
//! Pure: no I/O and no caller identity. The service loads a
//! [`CatalogSnapshot`] with everything the request references and hands it in.

use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, round_money},
    meal_plan::{entities::MealPlan, value_objects::MealType},
    order::{
        entities::{
            LineItem, MealPlanLineItem, PriceBreakdown, ProductLineItem, SubscriptionLineItem,
        },
        value_objects::{OrderRequest, OrderType, ProductLine, SubscriptionRequest},
    },
    product::entities::Product,
};

/// Fixed sales tax applied to every order subtotal.
pub const TAX_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Largest order amount the orders table stores (`NUMERIC(12, 2)`).
pub const MAX_ORDER_AMOUNT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// Catalog records referenced by one order request.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub products: HashMap<Uuid, Product>,
    pub meal_plans: HashMap<Uuid, MealPlan>,
    pub meal_ids: HashSet<Uuid>,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<Product>, meal_plans: Vec<MealPlan>, meals: Vec<Uuid>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
            meal_plans: meal_plans.into_iter().map(|m| (m.id, m)).collect(),
            meal_ids: meals.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedOrder {
    pub order_type: OrderType,
    pub line_items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub meal_plan_id: Option<Uuid>,
}

impl PricedOrder {
    /// Applies tax to `subtotal`; `field` names the input blamed when the
    /// amounts do not fit the orders table.
    fn from_subtotal(
        order_type: OrderType,
        line_items: Vec<LineItem>,
        subtotal: Decimal,
        meal_plan_id: Option<Uuid>,
        field: &str,
    ) -> Result<Self, CoreError> {
        let subtotal = round_money(subtotal);
        let tax = subtotal
            .checked_mul(TAX_RATE)
            .map(round_money)
            .ok_or_else(|| amount_too_large(field))?;
        let total = subtotal
            .checked_add(tax)
            .map(round_money)
            .ok_or_else(|| amount_too_large(field))?;

        if total > MAX_ORDER_AMOUNT {
            return Err(amount_too_large(field));
        }

        Ok(Self {
            order_type,
            line_items,
            subtotal,
            tax,
            total,
            meal_plan_id,
        })
    }
}

fn amount_too_large(field: &str) -> CoreError {
    CoreError::invalid_field(
        field,
        format!("The order total may not exceed {MAX_ORDER_AMOUNT}."),
    )
}

fn checked_line_total(price: Decimal, count: Decimal, field: &str) -> Result<Decimal, CoreError> {
    price
        .checked_mul(count)
        .map(round_money)
        .ok_or_else(|| amount_too_large(field))
}

/// Prices a request. Referenced records missing from `catalog` fail with
/// [`CoreError::NotFound`].
pub fn price_order(
    request: &OrderRequest,
    catalog: &CatalogSnapshot,
) -> Result<PricedOrder, CoreError> {
    match request {
        OrderRequest::Products { items } => price_products(items, catalog),
        OrderRequest::MealPlan { meal_plan_id, days } => {
            price_meal_plan_days(*meal_plan_id, *days, catalog)
        }
        OrderRequest::Subscription(subscription) => price_subscription(subscription, catalog),
    }
}

fn price_products(items: &[ProductLine], catalog: &CatalogSnapshot) -> Result<PricedOrder, CoreError> {
    let mut line_items = Vec::with_capacity(items.len());
    let mut subtotal = Decimal::ZERO;

    for line in items {
        let product = catalog
            .products
            .get(&line.product_id)
            .ok_or(CoreError::NotFound)?;

        let unit_price = product.price.base;
        let line_subtotal =
            checked_line_total(unit_price, Decimal::from(line.quantity), "products")?;
        subtotal = subtotal
            .checked_add(line_subtotal)
            .ok_or_else(|| amount_too_large("products"))?;

        line_items.push(LineItem::Product(ProductLineItem {
            product_id: product.id,
            product_name: product.name.clone(),
            product_sku: product.sku.clone(),
            quantity: line.quantity,
            unit_price,
            subtotal: line_subtotal,
        }));
    }

    PricedOrder::from_subtotal(OrderType::Products, line_items, subtotal, None, "products")
}

fn price_meal_plan_days(
    meal_plan_id: Uuid,
    days: u32,
    catalog: &CatalogSnapshot,
) -> Result<PricedOrder, CoreError> {
    let plan = catalog
        .meal_plans
        .get(&meal_plan_id)
        .ok_or(CoreError::NotFound)?;

    let breakdown = PriceBreakdown {
        breakfast: plan.prices.breakfast_price_per_day,
        lunch: plan.prices.lunch_price_per_day,
        dinner: plan.prices.dinner_price_per_day,
    };
    let daily_price = round_money(breakdown.breakfast + breakdown.lunch + breakdown.dinner);
    let subtotal = checked_line_total(daily_price, Decimal::from(days), "total_price")?;

    let line_item = LineItem::MealPlan(MealPlanLineItem {
        meal_plan_id: plan.id,
        meal_plan_name: plan.name.clone(),
        meal_plan_sku: plan.sku.clone(),
        days,
        daily_price,
        price_breakdown: breakdown,
        subtotal,
    });

    PricedOrder::from_subtotal(
        OrderType::MealPlan,
        vec![line_item],
        subtotal,
        Some(plan.id),
        "total_price",
    )
}

fn price_subscription(
    subscription: &SubscriptionRequest,
    catalog: &CatalogSnapshot,
) -> Result<PricedOrder, CoreError> {
    let plan = catalog
        .meal_plans
        .get(&subscription.meal_plan_id)
        .ok_or(CoreError::NotFound)?;

    let breakdown: BTreeMap<MealType, Decimal> = subscription
        .preferences
        .meal_types()
        .into_iter()
        .map(|meal_type| (meal_type, plan.prices.price_for(meal_type)))
        .collect();
    let daily_price = round_money(breakdown.values().copied().sum());

    let delivery_days = subscription.unique_delivery_days().len() as u32;
    let subtotal = checked_line_total(daily_price, Decimal::from(delivery_days), "total_price")?;

    let line_item = LineItem::MealPlanSubscription(SubscriptionLineItem {
        meal_plan_id: plan.id,
        meal_plan_name: plan.name.clone(),
        meal_plan_sku: plan.sku.clone(),
        delivery_days,
        daily_price,
        price_breakdown: breakdown,
        subtotal,
    });

    PricedOrder::from_subtotal(
        OrderType::MealPlan,
        vec![line_item],
        subtotal,
        Some(plan.id),
        "total_price",
    )
}
