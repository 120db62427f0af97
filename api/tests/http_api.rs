mod common;

use axum::http::{StatusCode, header::AUTHORIZATION};
use chrono::Utc;
use common::{ApiContext, bearer};
use pantry_core::entity::{categories, products};
use rust_decimal::Decimal;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{Value, json};
use test_context::test_context;
use uuid::Uuid;

#[test_context(ApiContext)]
#[tokio::test]
async fn test_create_order_requires_authentication(ctx: &mut ApiContext) {
    let server = ctx.empty_server();

    let response = server
        .post("/orders")
        .json(&json!({
            "client_name": "Jane Doe",
            "client_email": "jane@example.com",
            "client_phone": "0600000000",
            "products": [{ "product_id": Uuid::new_v4(), "quantity": 1 }]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_UNAUTHORIZED");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_invalid_token_is_rejected(ctx: &mut ApiContext) {
    let server = ctx.empty_server();

    let response = server
        .get("/orders")
        .add_header(AUTHORIZATION, bearer("not-a-jwt"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_customer_cannot_create_category(ctx: &mut ApiContext) {
    let server = ctx.empty_server();

    let response = server
        .post("/categories")
        .add_header(AUTHORIZATION, bearer(&ctx.customer_token))
        .json(&json!({ "name": "Cardstock" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_FORBIDDEN");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_customer_cannot_list_orders(ctx: &mut ApiContext) {
    let server = ctx.empty_server();

    let response = server
        .get("/orders")
        .add_header(AUTHORIZATION, bearer(&ctx.customer_token))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_order_with_products_and_meal_plan_is_rejected(ctx: &mut ApiContext) {
    let server = ctx.empty_server();

    let response = server
        .post("/orders")
        .add_header(AUTHORIZATION, bearer(&ctx.customer_token))
        .json(&json!({
            "client_name": "Jane Doe",
            "client_email": "jane@example.com",
            "client_phone": "0600000000",
            "products": [{ "product_id": Uuid::new_v4(), "quantity": 1 }],
            "meal_plan_id": Uuid::new_v4(),
            "days": 5
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["errors"]["order_type"].is_array());
    assert_eq!(
        body["message"],
        "Cannot order both products and a meal plan in the same order. Please choose one."
    );
}

fn product_row(id: Uuid) -> products::Model {
    let now = Utc::now().naive_utc();
    products::Model {
        id,
        name: "Paper Plates".to_string(),
        sku: "PP-9".to_string(),
        description: "9in plates".to_string(),
        status: "active".to_string(),
        stock_quantity: 100,
        price_base: Decimal::new(499, 2),
        price_discount: None,
        category_id: Uuid::new_v4(),
        variants: None,
        metadata: json!({}),
        is_deleted: false,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_order_client_fields_are_validated(ctx: &mut ApiContext) {
    let product_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![product_row(product_id)]]);
    let server = ctx.server(db);

    let response = server
        .post("/orders")
        .add_header(AUTHORIZATION, bearer(&ctx.customer_token))
        .json(&json!({
            "client_name": "",
            "client_email": "not-an-email",
            "client_phone": "0600000000",
            "products": [{ "product_id": product_id, "quantity": 1 }]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["errors"]["client_name"][0], "Client name is required.");
    assert_eq!(
        body["errors"]["client_email"][0],
        "Please provide a valid email address."
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_order_without_client_name_is_unprocessable(ctx: &mut ApiContext) {
    let product_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![product_row(product_id)]]);
    let server = ctx.server(db);

    let response = server
        .post("/orders")
        .add_header(AUTHORIZATION, bearer(&ctx.customer_token))
        .json(&json!({
            "client_email": "jane@example.com",
            "client_phone": "0600000000",
            "products": [{ "product_id": product_id, "quantity": 1 }]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "message": "Client name is required.",
            "errors": { "client_name": ["Client name is required."] }
        })
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_order_errors_from_every_check_are_reported_together(ctx: &mut ApiContext) {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<products::Model>::new()]);
    let server = ctx.server(db);

    let response = server
        .post("/orders")
        .add_header(AUTHORIZATION, bearer(&ctx.customer_token))
        .json(&json!({
            "client_email": "jane@example.com",
            "client_phone": "0600000000",
            "products": [{ "product_id": Uuid::new_v4(), "quantity": 0 }],
            "days": 3
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    let errors = &body["errors"];
    assert!(errors["client_name"].is_array());
    assert!(errors["days"].is_array());
    assert!(errors["products.0.quantity"].is_array());
    assert!(errors["products.0.product_id"].is_array());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_order_field_of_the_wrong_type_is_unprocessable(ctx: &mut ApiContext) {
    let server = ctx.empty_server();

    let response = server
        .post("/orders")
        .add_header(AUTHORIZATION, bearer(&ctx.customer_token))
        .json(&json!({
            "client_name": "Jane Doe",
            "client_email": "jane@example.com",
            "client_phone": "0600000000",
            "products": [{ "product_id": Uuid::new_v4(), "quantity": "two" }]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["errors"]["products.0.quantity"].is_array());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_unknown_order_status_is_rejected(ctx: &mut ApiContext) {
    let server = ctx.empty_server();

    let response = server
        .put(&format!("/orders/{}/status", Uuid::new_v4()))
        .add_header(AUTHORIZATION, bearer(&ctx.admin_token))
        .json(&json!({ "Status": "Shipped", "Comment": "On its way" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["errors"]["Status"].is_array());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_get_categories_is_public(ctx: &mut ApiContext) {
    let now = Utc::now().naive_utc();
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
        categories::Model {
            id: Uuid::new_v4(),
            name: "Cardstock".to_string(),
            slug: "cardstock".to_string(),
            is_active: true,
            is_deleted: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        },
    ]]);
    let server = ctx.server(db);

    let response = server.get("/categories").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"][0]["name"], "Cardstock");
    assert_eq!(body["data"][0]["slug"], "cardstock");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_health_live(ctx: &mut ApiContext) {
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([MockExecResult {
        last_insert_id: 0,
        rows_affected: 1,
    }]);
    let server = ctx.server(db);

    let response = server.get("/health/live").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["status"], "alive");
}
