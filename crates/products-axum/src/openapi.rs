//! OpenAPI document for the product routes.

use axum::Json;
use utoipa::OpenApi;

use crate::dto::{ProductRequestDto, ProductResponseDto};
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::products::create,
        handlers::products::get,
        handlers::products::update,
        handlers::products::remove,
        handlers::products::list_by_price,
        handlers::products::list,
    ),
    components(schemas(ProductRequestDto, ProductResponseDto)),
    tags((name = "products", description = "Product catalogue"))
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document.
pub(crate) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
