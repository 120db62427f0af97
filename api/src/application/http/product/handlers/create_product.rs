use crate::application::auth::RequiredIdentity;
use crate::application::http::product::handlers::get_product::ProductResponse;
use crate::application::http::product::validators::ProductValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantry_core::domain::product::ports::ProductService;
use pantry_core::domain::product::value_objects::CreateProductInput;

#[utoipa::path(
    post,
    path = "",
    tag = "product",
    summary = "Create product",
    security(("bearer" = [])),
    responses(
        (status = 201, body = ProductResponse),
        (status = 422, description = "Invalid product attributes")
    ),
    request_body = ProductValidator
)]
pub async fn create_product(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ProductValidator>,
) -> Result<Response<ProductResponse>, ApiError> {
    let product = state
        .service
        .create_product(
            identity,
            CreateProductInput {
                attributes: payload.into(),
            },
        )
        .await?;

    Ok(Response::Created(ProductResponse { data: product }))
}
