//! Checkout request validation.
//!
//! Two passes, both collecting every failure: [`classify`] turns the raw
//! body into an [`OrderRequest`] from its shape alone, then
//! [`validate_request`] checks it against the catalog and the calendar.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::{
    common::{entities::field_errors::FieldErrors, round_money},
    order::{
        pricing::{CatalogSnapshot, PricedOrder},
        value_objects::{OrderDraft, OrderRequest, SubscriptionRequest},
    },
};

pub const MAX_PLAN_DAYS: i64 = 365;
pub const MAX_LINE_QUANTITY: i64 = 10_000;

/// Outcome of [`classify`]. `request` is set whenever the order kind could be
/// determined, even if `errors` holds shape failures, so the catalog checks
/// can still run and report alongside them.
#[derive(Debug)]
pub struct Classified {
    pub request: Option<OrderRequest>,
    pub errors: FieldErrors,
}

impl Classified {
    pub fn into_result(self) -> Result<OrderRequest, FieldErrors> {
        match self.request {
            Some(request) if self.errors.is_empty() => Ok(request),
            _ => Err(self.errors),
        }
    }
}

/// Resolves which kind of order the draft describes.
pub fn classify(draft: OrderDraft) -> Classified {
    let mut errors = FieldErrors::new();

    let has_products = match &draft.products {
        Some(items) if items.is_empty() => {
            errors.add("products", "Please provide at least one product.");
            false
        }
        Some(_) => true,
        None => false,
    };

    let meal_plan_id = match (has_products, draft.meal_plan_id) {
        (true, Some(_)) => {
            errors.add(
                "order_type",
                "Cannot order both products and a meal plan in the same order. Please choose one.",
            );
            return Classified {
                request: None,
                errors,
            };
        }
        (false, None) => {
            errors.add(
                "order_type",
                "You must provide either products or a meal plan to create an order.",
            );
            return Classified {
                request: None,
                errors,
            };
        }
        (true, None) => {
            for field in schedule_fields(&draft) {
                errors.add(field, "This field is only allowed for meal plan orders.");
            }
            let items = draft.products.unwrap_or_default();
            for (index, line) in items.iter().enumerate() {
                if line.quantity < 1 {
                    errors.add(
                        format!("products.{index}.quantity"),
                        "Quantity must be at least 1.",
                    );
                } else if line.quantity > MAX_LINE_QUANTITY {
                    errors.add(
                        format!("products.{index}.quantity"),
                        format!("Quantity may not exceed {MAX_LINE_QUANTITY}."),
                    );
                }
            }
            return Classified {
                request: Some(OrderRequest::Products { items }),
                errors,
            };
        }
        (false, Some(meal_plan_id)) => meal_plan_id,
    };

    let Some(delivery_days) = draft.delivery_days else {
        if draft.menu_selections.is_some() {
            errors.add(
                "delivery_days",
                "Delivery days are required when menu selections are provided.",
            );
        }
        let days = match draft.days {
            None => {
                errors.add("days", "Number of days is required for meal plan orders.");
                0
            }
            Some(days) if days < 1 => {
                errors.add("days", "Meal plan duration must be at least 1 day.");
                0
            }
            Some(days) if days > MAX_PLAN_DAYS => {
                errors.add("days", "Meal plan duration cannot exceed 365 days.");
                0
            }
            Some(days) => days as u32,
        };
        return Classified {
            request: Some(OrderRequest::MealPlan { meal_plan_id, days }),
            errors,
        };
    };

    if draft.days.is_some() {
        errors.add("days", "Provide either days or delivery_days, not both.");
    }
    if draft.menu_selections.is_none() {
        errors.add("menu_selections", "Menu selections are required.");
    }
    if draft.delivery_address.is_none() {
        errors.add("delivery_address", "The delivery address is required.");
    }
    let (Some(menu_selections), Some(delivery_address)) =
        (draft.menu_selections, draft.delivery_address)
    else {
        return Classified {
            request: None,
            errors,
        };
    };

    Classified {
        request: Some(OrderRequest::Subscription(SubscriptionRequest {
            meal_plan_id,
            delivery_days,
            menu_selections,
            preferences: draft.preferences.unwrap_or_default(),
            delivery_address,
            total_price: draft.total_price,
        })),
        errors,
    }
}

fn schedule_fields(draft: &OrderDraft) -> Vec<&'static str> {
    [
        ("days", draft.days.is_some()),
        ("delivery_days", draft.delivery_days.is_some()),
        ("menu_selections", draft.menu_selections.is_some()),
        ("preferences", draft.preferences.is_some()),
        ("delivery_address", draft.delivery_address.is_some()),
        ("total_price", draft.total_price.is_some()),
    ]
    .into_iter()
    .filter_map(|(field, present)| present.then_some(field))
    .collect()
}

/// Checks references against `catalog` and the delivery schedule against `today`.
pub fn validate_request(
    request: &OrderRequest,
    catalog: &CatalogSnapshot,
    today: NaiveDate,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match request {
        OrderRequest::Products { items } => {
            for (index, line) in items.iter().enumerate() {
                if !catalog.products.contains_key(&line.product_id) {
                    errors.add(
                        format!("products.{index}.product_id"),
                        "One or more products do not exist.",
                    );
                }
            }
        }
        OrderRequest::MealPlan { meal_plan_id, .. } => {
            if !catalog.meal_plans.contains_key(meal_plan_id) {
                errors.add("meal_plan_id", "The selected meal plan does not exist.");
            }
        }
        OrderRequest::Subscription(subscription) => {
            if !catalog.meal_plans.contains_key(&subscription.meal_plan_id) {
                errors.add("meal_plan_id", "The selected meal plan does not exist.");
            }
            errors.merge(validate_subscription(subscription, catalog, today));
        }
    }

    errors
}

fn validate_subscription(
    subscription: &SubscriptionRequest,
    catalog: &CatalogSnapshot,
    today: NaiveDate,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if subscription.delivery_days.is_empty() {
        errors.add("delivery_days", "At least one delivery day is required.");
    }
    let mut seen = BTreeSet::new();
    for (index, day) in subscription.delivery_days.iter().enumerate() {
        if *day <= today {
            errors.add(
                format!("delivery_days.{index}"),
                format!("Delivery day {day} must be in the future."),
            );
        }
        if !seen.insert(*day) {
            errors.add(
                format!("delivery_days.{index}"),
                format!("Delivery day {day} is listed more than once."),
            );
        }
    }

    let required = subscription.preferences.meal_types();
    if required.is_empty() {
        errors.add("preferences.meals", "At least one meal type must be requested.");
    }

    for day in &seen {
        let Some(selection) = subscription.menu_selections.get(day) else {
            errors.add(
                format!("menu_selections.{day}"),
                format!("Menu selection is missing for {day}."),
            );
            continue;
        };

        for meal_type in &required {
            if !matches!(selection.get(meal_type), Some(Some(_))) {
                errors.add(
                    format!("menu_selections.{day}.{meal_type}"),
                    format!("A {meal_type} selection is required for {day}."),
                );
            }
        }

        for (meal_type, meal_id) in selection {
            let field = format!("menu_selections.{day}.{meal_type}");
            if !required.contains(meal_type) {
                errors.add(
                    field,
                    format!("{meal_type} was not requested in the subscription preferences."),
                );
            } else if let Some(meal_id) = meal_id
                && !catalog.meal_ids.contains(meal_id)
            {
                errors.add(field, "The selected meal does not exist.");
            }
        }
    }

    for day in subscription.menu_selections.keys() {
        if !seen.contains(day) {
            errors.add(
                format!("menu_selections.{day}"),
                format!("{day} is not one of the delivery days."),
            );
        }
    }

    let address = &subscription.delivery_address;
    for (field, value, message) in [
        ("delivery_address.line1", &address.line1, "The address line is required."),
        ("delivery_address.city", &address.city, "The city is required."),
        ("delivery_address.postal_code", &address.postal_code, "The postal code is required."),
    ] {
        if value.trim().is_empty() {
            errors.add(field, message);
        }
    }

    errors
}

/// A client-quoted total must match the server-computed one to the cent.
pub fn check_quoted_total(request: &OrderRequest, priced: &PricedOrder) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let OrderRequest::Subscription(SubscriptionRequest {
        total_price: Some(quoted),
        ..
    }) = request
        && round_money(*quoted) != priced.total
    {
        errors.add(
            "total_price",
            format!(
                "The quoted total {quoted} does not match the order total {}.",
                priced.total
            ),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, str::FromStr};

    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        meal_plan::{
            entities::MealPlan,
            value_objects::{MealPlanAttributes, MealPlanPrices, MealType},
        },
        order::{
            pricing::price_order,
            value_objects::{
                DeliveryAddress, MenuSelection, ProductLine, SubscriptionPreferences,
            },
        },
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, d).unwrap()
    }

    fn plan() -> MealPlan {
        MealPlan::new(MealPlanAttributes {
            name: "Balanced".to_string(),
            sku: "MP-BAL".to_string(),
            description: "Three meals a day".to_string(),
            image: None,
            prices: MealPlanPrices {
                breakfast_price_per_day: Decimal::from(3),
                lunch_price_per_day: Decimal::from(4),
                dinner_price_per_day: Decimal::from(5),
                snack_price_per_day: Decimal::from(2),
            },
        })
    }

    fn address() -> DeliveryAddress {
        DeliveryAddress {
            line1: "1 Main St".to_string(),
            line2: None,
            city: "Springfield".to_string(),
            postal_code: "12345".to_string(),
            instructions: None,
        }
    }

    fn full_selection(meal: Uuid) -> MenuSelection {
        MealType::DEFAULT_PREFERENCES
            .into_iter()
            .map(|meal_type| (meal_type, Some(meal)))
            .collect()
    }

    fn subscription_draft(plan_id: Uuid, meal: Uuid) -> OrderDraft {
        OrderDraft {
            meal_plan_id: Some(plan_id),
            delivery_days: Some(vec![day(2), day(3)]),
            menu_selections: Some(BTreeMap::from([
                (day(2), full_selection(meal)),
                (day(3), full_selection(meal)),
            ])),
            delivery_address: Some(address()),
            ..Default::default()
        }
    }

    fn products_line() -> Vec<ProductLine> {
        vec![ProductLine {
            product_id: Uuid::new_v4(),
            quantity: 1,
        }]
    }

    #[test]
    fn test_both_products_and_meal_plan_is_rejected() {
        let draft = OrderDraft {
            products: Some(products_line()),
            meal_plan_id: Some(Uuid::new_v4()),
            days: Some(-4),
            ..Default::default()
        };

        let errors = classify(draft).into_result().unwrap_err();
        assert!(errors.contains("order_type"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_neither_products_nor_meal_plan_is_rejected() {
        let errors = classify(OrderDraft::default()).into_result().unwrap_err();
        assert!(errors.contains("order_type"));

        let empty = OrderDraft {
            products: Some(vec![]),
            ..Default::default()
        };
        let errors = classify(empty).into_result().unwrap_err();
        assert!(errors.contains("order_type"));
        assert!(errors.contains("products"));
    }

    #[test]
    fn test_products_quantity_must_be_positive() {
        let draft = OrderDraft {
            products: Some(vec![ProductLine {
                product_id: Uuid::new_v4(),
                quantity: 0,
            }]),
            ..Default::default()
        };

        let errors = classify(draft).into_result().unwrap_err();
        assert!(errors.contains("products.0.quantity"));
    }

    #[test]
    fn test_products_quantity_has_a_ceiling() {
        let draft = OrderDraft {
            products: Some(vec![
                ProductLine {
                    product_id: Uuid::new_v4(),
                    quantity: MAX_LINE_QUANTITY,
                },
                ProductLine {
                    product_id: Uuid::new_v4(),
                    quantity: i64::MAX,
                },
            ]),
            ..Default::default()
        };

        let classified = classify(draft);

        assert!(classified.request.is_some());
        assert_eq!(
            classified.errors.get("products.1.quantity"),
            Some(&["Quantity may not exceed 10000.".to_string()][..])
        );
        assert_eq!(classified.errors.len(), 1);
    }

    #[test]
    fn test_shape_errors_keep_the_request_for_catalog_checks() {
        let draft = OrderDraft {
            products: Some(vec![ProductLine {
                product_id: Uuid::new_v4(),
                quantity: 0,
            }]),
            days: Some(3),
            ..Default::default()
        };

        let Classified { request, errors } = classify(draft);
        let request = request.unwrap();
        let catalog_errors = validate_request(&request, &CatalogSnapshot::default(), today());

        assert!(errors.contains("products.0.quantity"));
        assert!(errors.contains("days"));
        assert!(catalog_errors.contains("products.0.product_id"));
    }

    #[test]
    fn test_subscription_without_address_has_no_request() {
        let mut draft = subscription_draft(Uuid::new_v4(), Uuid::new_v4());
        draft.delivery_address = None;

        let Classified { request, errors } = classify(draft);

        assert!(request.is_none());
        assert!(errors.contains("delivery_address"));
    }

    #[test]
    fn test_products_reject_schedule_fields() {
        let draft = OrderDraft {
            products: Some(products_line()),
            days: Some(3),
            ..Default::default()
        };

        let errors = classify(draft).into_result().unwrap_err();
        assert!(errors.contains("days"));
    }

    #[test]
    fn test_meal_plan_days_bounds() {
        let id = Uuid::new_v4();
        for (days, ok) in [(None, false), (Some(0), false), (Some(366), false), (Some(365), true)] {
            let draft = OrderDraft {
                meal_plan_id: Some(id),
                days,
                ..Default::default()
            };
            assert_eq!(classify(draft).into_result().is_ok(), ok, "days = {days:?}");
        }
    }

    #[test]
    fn test_days_and_delivery_days_are_exclusive() {
        let mut draft = subscription_draft(Uuid::new_v4(), Uuid::new_v4());
        draft.days = Some(2);

        let errors = classify(draft).into_result().unwrap_err();
        assert!(errors.contains("days"));
    }

    #[test]
    fn test_subscription_defaults_preferences() {
        let request = classify(subscription_draft(Uuid::new_v4(), Uuid::new_v4())).into_result().unwrap();

        let OrderRequest::Subscription(subscription) = request else {
            panic!("expected a subscription");
        };
        assert_eq!(subscription.preferences, SubscriptionPreferences::default());
    }

    #[test]
    fn test_unknown_references_are_reported() {
        let request = OrderRequest::Products {
            items: products_line(),
        };
        let errors = validate_request(&request, &CatalogSnapshot::default(), today());
        assert!(errors.contains("products.0.product_id"));

        let request = OrderRequest::MealPlan {
            meal_plan_id: Uuid::new_v4(),
            days: 3,
        };
        let errors = validate_request(&request, &CatalogSnapshot::default(), today());
        assert!(errors.contains("meal_plan_id"));
    }

    #[test]
    fn test_valid_subscription_passes() {
        let plan = plan();
        let meal = Uuid::new_v4();
        let request = classify(subscription_draft(plan.id, meal)).into_result().unwrap();
        let catalog = CatalogSnapshot::new(vec![], vec![plan], vec![meal]);

        assert!(validate_request(&request, &catalog, today()).is_empty());
    }

    #[test]
    fn test_missing_day_selection_names_the_date() {
        let plan = plan();
        let meal = Uuid::new_v4();
        let mut draft = subscription_draft(plan.id, meal);
        draft.menu_selections.as_mut().unwrap().remove(&day(3));
        let request = classify(draft).into_result().unwrap();
        let catalog = CatalogSnapshot::new(vec![], vec![plan], vec![meal]);

        let errors = validate_request(&request, &catalog, today());

        let messages = errors.get("menu_selections.2030-01-03").unwrap();
        assert!(messages[0].contains("2030-01-03"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_missing_meal_type_and_unknown_meal() {
        let plan = plan();
        let meal = Uuid::new_v4();
        let mut draft = subscription_draft(plan.id, meal);
        let selections = draft.menu_selections.as_mut().unwrap();
        selections
            .get_mut(&day(2))
            .unwrap()
            .insert(MealType::Lunch, None);
        selections
            .get_mut(&day(3))
            .unwrap()
            .insert(MealType::Dinner, Some(Uuid::new_v4()));
        let request = classify(draft).into_result().unwrap();
        let catalog = CatalogSnapshot::new(vec![], vec![plan], vec![meal]);

        let errors = validate_request(&request, &catalog, today());

        assert!(errors.contains("menu_selections.2030-01-02.lunch"));
        assert!(errors.contains("menu_selections.2030-01-03.dinner"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_unrequested_meal_type_and_extra_date() {
        let plan = plan();
        let meal = Uuid::new_v4();
        let mut draft = subscription_draft(plan.id, meal);
        let selections = draft.menu_selections.as_mut().unwrap();
        selections
            .get_mut(&day(2))
            .unwrap()
            .insert(MealType::Snack, Some(meal));
        selections.insert(day(9), full_selection(meal));
        let request = classify(draft).into_result().unwrap();
        let catalog = CatalogSnapshot::new(vec![], vec![plan], vec![meal]);

        let errors = validate_request(&request, &catalog, today());

        assert!(errors.contains("menu_selections.2030-01-02.snack"));
        assert!(errors.contains("menu_selections.2030-01-09"));
    }

    #[test]
    fn test_delivery_days_must_be_future_and_unique() {
        let plan = plan();
        let meal = Uuid::new_v4();
        let mut draft = subscription_draft(plan.id, meal);
        draft.delivery_days = Some(vec![day(1), day(2), day(2), day(3)]);
        draft
            .menu_selections
            .as_mut()
            .unwrap()
            .insert(day(1), full_selection(meal));
        let request = classify(draft).into_result().unwrap();
        let catalog = CatalogSnapshot::new(vec![], vec![plan], vec![meal]);

        let errors = validate_request(&request, &catalog, today());

        assert!(errors.contains("delivery_days.0"));
        assert!(errors.contains("delivery_days.2"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_address_and_preferences_are_required() {
        let plan = plan();
        let meal = Uuid::new_v4();
        let mut draft = subscription_draft(plan.id, meal);
        draft.delivery_address = Some(DeliveryAddress::default());
        draft.preferences = Some(SubscriptionPreferences { meals: vec![] });
        let request = classify(draft).into_result().unwrap();
        let catalog = CatalogSnapshot::new(vec![], vec![plan], vec![meal]);

        let errors = validate_request(&request, &catalog, today());

        assert!(errors.contains("preferences.meals"));
        assert!(errors.contains("delivery_address.line1"));
        assert!(errors.contains("delivery_address.city"));
        assert!(errors.contains("delivery_address.postal_code"));
    }

    #[test]
    fn test_quoted_total_is_cross_checked() {
        let plan = plan();
        let meal = Uuid::new_v4();
        let catalog = CatalogSnapshot::new(vec![], vec![plan.clone()], vec![meal]);

        let mut draft = subscription_draft(plan.id, meal);
        draft.total_price = Some(Decimal::from_str("28.80").unwrap());
        let request = classify(draft).into_result().unwrap();
        let priced = price_order(&request, &catalog).unwrap();
        assert!(check_quoted_total(&request, &priced).is_empty());

        let mut draft = subscription_draft(plan.id, meal);
        draft.total_price = Some(Decimal::from_str("10.00").unwrap());
        let request = classify(draft).into_result().unwrap();
        let priced = price_order(&request, &catalog).unwrap();
        assert!(check_quoted_total(&request, &priced).contains("total_price"));
    }
}
