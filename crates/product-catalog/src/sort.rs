//! Optional column sorting applied after filtering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SortParseError;
use crate::model::EnrichedProduct;

/// Column of the product table a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    /// Product id.
    Id,
    /// Product name.
    Product,
    /// Category title.
    Category,
    /// Name of the category owner.
    User,
}

impl SortColumn {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Product => "product",
            Self::Category => "category",
            Self::User => "user",
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first; absent values come before present ones.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// A column plus a direction.
///
/// Parses from `column` or `column:asc|desc`:
///
/// ```
/// use product_catalog::{SortColumn, SortDirection, SortOrder};
///
/// let order: SortOrder = "user:desc".parse().expect("valid order");
/// assert_eq!(order.column, SortColumn::User);
/// assert_eq!(order.direction, SortDirection::Descending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOrder {
    /// Column to compare.
    pub column: SortColumn,
    /// Direction of the comparison.
    pub direction: SortDirection,
}

impl SortOrder {
    /// Sorts by `column` ascending.
    #[must_use]
    pub const fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    /// Sorts by `column` descending.
    #[must_use]
    pub const fn descending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }
}

impl FromStr for SortOrder {
    type Err = SortParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (column_part, direction_part) = value
            .split_once(':')
            .map_or((value, None), |(column, direction)| (column, Some(direction)));

        let column = match column_part.trim().to_ascii_lowercase().as_str() {
            "id" => SortColumn::Id,
            "product" | "name" => SortColumn::Product,
            "category" => SortColumn::Category,
            "user" | "owner" => SortColumn::User,
            _ => {
                return Err(SortParseError::UnknownColumn {
                    value: column_part.to_owned(),
                });
            }
        };

        let direction = direction_part.map_or(Ok(SortDirection::Ascending), parse_direction)?;

        Ok(Self { column, direction })
    }
}

fn parse_direction(raw: &str) -> Result<SortDirection, SortParseError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "asc" => Ok(SortDirection::Ascending),
        "desc" => Ok(SortDirection::Descending),
        _ => Err(SortParseError::UnknownDirection {
            value: raw.to_owned(),
        }),
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{}:{direction}", self.column.as_str())
    }
}

/// Sorts `products` in place by `order`.
///
/// The sort is stable, so ties keep their filtered order. Text columns
/// compare case-insensitively.
pub fn sort_products(products: &mut [EnrichedProduct], order: SortOrder) {
    products.sort_by(|a, b| {
        let ordering = compare(a, b, order.column);
        match order.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &EnrichedProduct, b: &EnrichedProduct, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Id => a.id.cmp(&b.id),
        SortColumn::Product => fold(Some(a.name.as_str())).cmp(&fold(Some(b.name.as_str()))),
        SortColumn::Category => fold(a.category_title()).cmp(&fold(b.category_title())),
        SortColumn::User => fold(a.owner_name()).cmp(&fold(b.owner_name())),
    }
}

fn fold(value: Option<&str>) -> Option<String> {
    value.map(str::to_lowercase)
}
