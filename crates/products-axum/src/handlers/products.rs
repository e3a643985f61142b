//! Product handlers - CRUD operations and listings.

use axum::Json;
use axum::extract::{Path, Query, State};
use products_core::ProductService;

use crate::dto::{ListProductsQuery, PriceRangeQuery, ProductRequestDto, ProductResponseDto};
use crate::error::HttpError;
use crate::state::AppState;

fn to_dtos(products: Vec<products_core::Product>) -> Vec<ProductResponseDto> {
    products.into_iter().map(ProductResponseDto::from).collect()
}

/// Create new product.
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = ProductRequestDto,
    responses((status = 200, description = "Created product", body = ProductResponseDto))
)]
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<ProductRequestDto>,
) -> Result<Json<ProductResponseDto>, HttpError> {
    let product = state.core.products().create(req.into()).await?;
    Ok(Json(product.into()))
}

/// Get product by id.
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = ProductResponseDto),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponseDto>, HttpError> {
    Ok(Json(state.core.products().get(id).await?.into()))
}

/// Update product by id.
///
/// Stores the body under the path id whether or not that id exists yet.
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductRequestDto,
    responses((status = 200, description = "Stored product", body = ProductResponseDto))
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<ProductRequestDto>,
) -> Result<Json<ProductResponseDto>, HttpError> {
    let product = state.core.products().update(id, req.into()).await?;
    Ok(Json(product.into()))
}

/// Delete product by id.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(), HttpError> {
    state.core.products().delete(id).await?;
    Ok(())
}

/// Get products in price range.
#[utoipa::path(
    get,
    path = "/products/by-price",
    tag = "products",
    params(PriceRangeQuery),
    responses((status = 200, description = "Products priced within [from, to]", body = [ProductResponseDto]))
)]
pub async fn list_by_price(
    State(state): State<AppState>,
    Query(query): Query<PriceRangeQuery>,
) -> Result<Json<Vec<ProductResponseDto>>, HttpError> {
    let request = ProductService::page_request(query.page, query.count, &query.sort_by)?;
    let products = state
        .core
        .products()
        .list_by_price_range(query.from, query.to, &request)
        .await?;
    Ok(Json(to_dtos(products)))
}

/// Get all products sorted.
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    params(ListProductsQuery),
    responses((status = 200, description = "One page of products", body = [ProductResponseDto]))
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponseDto>>, HttpError> {
    let request = ProductService::page_request(query.page, query.count, &query.sort_by)?;
    let products = state.core.products().list_page(&request).await?;
    Ok(Json(to_dtos(products)))
}
