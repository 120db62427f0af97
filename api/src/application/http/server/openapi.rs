use crate::application::http::{
    category::router::CategoryApiDoc, health::router::HealthApiDoc, meal::router::MealApiDoc,
    meal_plan::router::MealPlanApiDoc, media::router::MediaApiDoc, order::router::OrderApiDoc,
    product::router::ProductApiDoc,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pantry API"
    ),
    modifiers(&BearerAuth),
    nest(
        (path = "/categories", api = CategoryApiDoc),
        (path = "/products", api = ProductApiDoc),
        (path = "/meals", api = MealApiDoc),
        (path = "/meal-plans", api = MealPlanApiDoc),
        (path = "/orders", api = OrderApiDoc),
        // utoipa-gen rejects an empty string literal here; concat!("") yields the same "" at runtime.
        (path = concat!(""), api = MediaApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
