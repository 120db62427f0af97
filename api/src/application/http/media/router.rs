use super::handlers::{
    create_upload_url::{__path_create_upload_url, create_upload_url},
    get_image::{__path_get_image, get_image},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_upload_url, get_image))]
pub struct MediaApiDoc;

pub fn media_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/media/upload", state.args.server.root_path),
            post(create_upload_url),
        )
        .route(
            &format!("{}/images/{{*path}}", state.args.server.root_path),
            get(get_image),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
