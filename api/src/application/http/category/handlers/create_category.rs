use crate::application::auth::RequiredIdentity;
use crate::application::http::category::handlers::get_category::CategoryResponse;
use crate::application::http::category::validators::CategoryValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantry_core::domain::category::ports::CategoryService;
use pantry_core::domain::category::value_objects::CreateCategoryInput;

#[utoipa::path(
    post,
    path = "",
    tag = "category",
    summary = "Create category",
    security(("bearer" = [])),
    responses(
        (status = 201, body = CategoryResponse),
        (status = 403, description = "Administrators only")
    ),
    request_body = CategoryValidator
)]
pub async fn create_category(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CategoryValidator>,
) -> Result<Response<CategoryResponse>, ApiError> {
    let category = state
        .service
        .create_category(
            identity,
            CreateCategoryInput {
                name: payload.name,
                slug: payload.slug,
                is_active: payload.is_active,
            },
        )
        .await?;

    Ok(Response::Created(CategoryResponse { data: category }))
}
