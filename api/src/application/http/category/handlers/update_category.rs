use crate::application::auth::RequiredIdentity;
use crate::application::http::category::handlers::get_category::CategoryResponse;
use crate::application::http::category::validators::CategoryValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantry_core::domain::category::ports::CategoryService;
use pantry_core::domain::category::value_objects::UpdateCategoryInput;
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/{category_id}",
    tag = "category",
    summary = "Update category",
    security(("bearer" = [])),
    params(
        ("category_id" = Uuid, Path, description = "Category ID"),
    ),
    responses(
        (status = 200, body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
    request_body = CategoryValidator
)]
pub async fn update_category(
    Path(category_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CategoryValidator>,
) -> Result<Response<CategoryResponse>, ApiError> {
    let category = state
        .service
        .update_category(
            identity,
            UpdateCategoryInput {
                category_id,
                name: payload.name,
                slug: payload.slug,
                is_active: payload.is_active,
            },
        )
        .await?;

    Ok(Response::OK(CategoryResponse { data: category }))
}
