use crate::application::auth::RequiredIdentity;
use crate::application::http::product::handlers::get_product::ProductResponse;
use crate::application::http::product::validators::ProductValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::product::ports::ProductService;
use pantry_core::domain::product::value_objects::UpdateProductInput;
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/{product_id}",
    tag = "product",
    summary = "Update product",
    security(("bearer" = [])),
    params(
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = ProductResponse),
        (status = 404, description = "Product not found")
    ),
    request_body = ProductValidator
)]
pub async fn update_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ProductValidator>,
) -> Result<Response<ProductResponse>, ApiError> {
    let product = state
        .service
        .update_product(
            identity,
            UpdateProductInput {
                product_id,
                attributes: payload.into(),
            },
        )
        .await?;

    Ok(Response::OK(ProductResponse { data: product }))
}
