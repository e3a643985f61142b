//! Query-string parameters for product listings.

use products_core::{DEFAULT_PAGE_SIZE, Decimal};
use serde::Deserialize;
use utoipa::IntoParams;

const fn default_count() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> String {
    "id".to_string()
}

/// Paging and ordering parameters shared by the listing endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// Page size (default 20).
    #[serde(default = "default_count")]
    pub count: u32,
    /// Zero-based page index (default 0).
    #[serde(default)]
    pub page: u32,
    /// Sort specification, e.g. `name:asc;price:desc` (default `id`).
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

/// Parameters for the price range listing.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PriceRangeQuery {
    /// Lowest price to include.
    #[param(value_type = String)]
    pub from: Decimal,
    /// Highest price to include.
    #[param(value_type = String)]
    pub to: Decimal,
    /// Page size (default 20). Accepted but not applied.
    #[serde(default = "default_count")]
    pub count: u32,
    /// Zero-based page index (default 0). Accepted but not applied.
    #[serde(default)]
    pub page: u32,
    /// Sort specification (default `id`). Validated but not applied.
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}
