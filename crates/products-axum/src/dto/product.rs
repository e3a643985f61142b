//! Product DTOs and their mappings to core types.

use products_core::{Decimal, NewProduct, Product};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating or updating a product.
///
/// Any `id` in the body is ignored; updates take the id from the path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductRequestDto {
    #[schema(example = "Desk lamp")]
    pub name: String,
    /// Decimal price, as a string or a JSON number.
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
}

/// Product as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: i64,
    pub name: String,
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
}

impl From<ProductRequestDto> for NewProduct {
    fn from(dto: ProductRequestDto) -> Self {
        Self::new(dto.name, dto.price)
    }
}

impl From<Product> for ProductResponseDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}
