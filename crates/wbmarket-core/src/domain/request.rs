use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ValidationError;

/// Cursor pagination for `/v3/supplies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: u32,
    next: i64,
}

impl Pagination {
    pub const MIN_LIMIT: u32 = 1;
    pub const MAX_LIMIT: u32 = 1000;

    pub fn new(limit: u32, next: i64) -> Result<Self, ValidationError> {
        if !(Self::MIN_LIMIT..=Self::MAX_LIMIT).contains(&limit) {
            return Err(ValidationError::LimitOutOfRange {
                value: limit,
                min: Self::MIN_LIMIT,
                max: Self::MAX_LIMIT,
            });
        }
        Ok(Self { limit, next })
    }

    pub const fn limit(self) -> u32 {
        self.limit
    }

    pub const fn next(self) -> i64 {
        self.next
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { limit: 1, next: 0 }
    }
}

/// Supply identifier such as `WB-GI-1234567`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SupplyId(String);

impl SupplyId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySupplyId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SupplyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SupplyId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Warehouse id filter for the coefficients endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarehouseIds(Vec<i64>);

impl WarehouseIds {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// Parses `302988,215020,301760`. Blank input yields an empty filter.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i64>()
                    .map_err(|_| ValidationError::InvalidWarehouseId {
                        value: part.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Comma-separated form used as the `warehouseIDs` query value.
    pub fn to_query_value(&self) -> String {
        self.0
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for WarehouseIds {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
