//! Sort specifications for product listings.
//!
//! A sort specification is written as `field` or `field:direction`, with
//! multiple criteria separated by `;`:
//!
//! ```text
//! name
//! price:desc
//! name:asc;price:desc
//! ```
//!
//! A criterion without a direction sorts descending. Parsing only checks the
//! shape of the string; field names are resolved against the product columns
//! by [`ProductSortField`] when a page request is built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const SEGMENT_SEPARATOR: char = ';';
const DIRECTION_SEPARATOR: char = ':';

/// Errors produced while parsing or resolving a sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortSpecError {
    /// A criterion has no field name (e.g. `":asc"` or an empty string).
    #[error("Sort criterion '{0}' has an empty field name")]
    EmptyField(String),

    /// The direction token is neither `ASC` nor `DESC`.
    #[error("Invalid sort direction '{0}' (expected ASC or DESC)")]
    InvalidDirection(String),

    /// The field does not name a sortable product attribute.
    #[error("Unknown sort field '{0}' (expected one of: id, name, price)")]
    UnknownField(String),
}

/// Ordering direction for a single sort criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction.
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = SortSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(SortSpecError::InvalidDirection(s.to_string()))
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A single `(field, direction)` criterion as written by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    fn parse_segment(segment: &str) -> Result<Self, SortSpecError> {
        let (field, direction) = match segment.split_once(DIRECTION_SEPARATOR) {
            Some((field, rest)) => {
                // `a:b:c` reads as field `a`, direction `b`
                let token = rest.split(DIRECTION_SEPARATOR).next().unwrap_or_default();
                (field, token.parse()?)
            }
            None => (segment, SortDirection::Desc),
        };

        if field.is_empty() {
            return Err(SortSpecError::EmptyField(segment.to_string()));
        }

        Ok(Self::new(field, direction))
    }
}

/// An ordered list of sort criteria, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    orders: Vec<SortOrder>,
}

impl SortSpec {
    /// Parse a sort specification string.
    ///
    /// Each `;`-separated segment is inspected on its own, so `name;price:asc`
    /// yields `name DESC, price ASC`. Empty segments are skipped.
    pub fn parse(raw: &str) -> Result<Self, SortSpecError> {
        if !raw.contains(DIRECTION_SEPARATOR) {
            if raw.is_empty() {
                return Err(SortSpecError::EmptyField(String::new()));
            }
            return Ok(Self {
                orders: vec![SortOrder::new(raw, SortDirection::Desc)],
            });
        }

        let orders = raw
            .split(SEGMENT_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(SortOrder::parse_segment)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { orders })
    }

    pub fn orders(&self) -> &[SortOrder] {
        &self.orders
    }
}

impl FromStr for SortSpec {
    type Err = SortSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Product attributes a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductSortField {
    Id,
    Name,
    Price,
}

impl ProductSortField {
    /// Attribute name as it appears in sort specifications.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Price => "price",
        }
    }
}

impl fmt::Display for ProductSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductSortField {
    type Err = SortSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            other => Err(SortSpecError::UnknownField(other.to_string())),
        }
    }
}

/// A resolved criterion over a known product attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductOrder {
    pub field: ProductSortField,
    pub direction: SortDirection,
}

impl TryFrom<&SortOrder> for ProductOrder {
    type Error = SortSpecError;

    fn try_from(order: &SortOrder) -> Result<Self, Self::Error> {
        Ok(Self {
            field: order.field.parse()?,
            direction: order.direction,
        })
    }
}
