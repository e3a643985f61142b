//! Row mapping helpers for `SQLite` queries.

use std::str::FromStr;

use products_core::{Product, RepositoryError};
use rust_decimal::Decimal;
use sqlx::Row;

/// Shared SELECT column list for product queries.
pub const PRODUCT_SELECT_COLUMNS: &str = "id, name, price";

/// Encode a price for storage.
///
/// Prices are kept as decimal text so no precision is lost to `REAL`.
pub fn price_to_text(price: Decimal) -> String {
    price.to_string()
}

/// Integer digits of the largest `Decimal` mantissa (2^96 - 1).
const KEY_INT_DIGITS: usize = 29;
/// Largest `Decimal` scale.
const KEY_FRAC_DIGITS: usize = 28;

/// Encode a price as a fixed-width key whose byte order matches numeric order.
///
/// Layout: a sign byte (`0` negative, `1` otherwise), 29 integer digits and
/// 28 fraction digits. Negative keys store the nines' complement of their
/// digits so that larger magnitudes sort first.
pub fn price_sort_key(price: Decimal) -> String {
    let digits = price.mantissa().unsigned_abs().to_string();
    let scale = price.scale() as usize;
    let digits = format!("{digits:0>width$}", width = scale + 1);
    let (int_part, frac_part) = digits.split_at(digits.len() - scale);

    let body = format!(
        "{int_part:0>KEY_INT_DIGITS$}{frac_part:0<KEY_FRAC_DIGITS$}"
    );

    if price.is_sign_negative() && !price.is_zero() {
        let complement: String = body
            .bytes()
            .map(|b| char::from(b'9' - b + b'0'))
            .collect();
        format!("0{complement}")
    } else {
        format!("1{body}")
    }
}

/// Decode a stored price.
pub fn price_from_text(raw: &str) -> Result<Decimal, RepositoryError> {
    Decimal::from_str(raw)
        .map_err(|e| RepositoryError::Serialization(format!("invalid stored price '{raw}': {e}")))
}

/// Parse a database row into a Product.
pub fn row_to_product(row: &sqlx::sqlite::SqliteRow) -> Result<Product, RepositoryError> {
    let price: String = row
        .try_get("price")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(Product {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        name: row
            .try_get("name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        price: price_from_text(&price)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_text_keeps_scale() {
        let price = Decimal::from_str("12.50").unwrap();
        assert_eq!(price_to_text(price), "12.50");
        assert_eq!(price_from_text("12.50").unwrap(), price);
    }

    fn key(raw: &str) -> String {
        price_sort_key(Decimal::from_str(raw).unwrap())
    }

    #[test]
    fn sort_key_ignores_scale() {
        assert_eq!(key("12.5"), key("12.500"));
        assert_eq!(key("0"), key("-0.00"));
        assert_eq!(key("1").len(), 1 + KEY_INT_DIGITS + KEY_FRAC_DIGITS);
    }

    #[test]
    fn sort_key_orders_like_decimals() {
        let ordered = [
            "-79228162514264337593543950335",
            "-100",
            "-9.99",
            "-1.00000000000000000002",
            "-1.00000000000000000001",
            "-0.0000000000000000000000000001",
            "0",
            "0.0000000000000000000000000001",
            "1.00000000000000000001",
            "1.00000000000000000002",
            "9.99",
            "10",
            "79228162514264337593543950335",
        ];

        for pair in ordered.windows(2) {
            assert!(key(pair[0]) < key(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn garbage_price_is_serialization_error() {
        let err = price_from_text("twelve").unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }
}
