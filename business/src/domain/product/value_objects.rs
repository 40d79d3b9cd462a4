use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::errors::ProductError;

/// Maximum number of fractional digits a price may carry.
pub const MAX_PRICE_SCALE: i64 = 4;

/// Store-assigned product identifier. Immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i32);

impl ProductId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Non-negative decimal price with at most [`MAX_PRICE_SCALE`] fractional digits.
#[derive(Debug, Clone, PartialEq)]
pub struct Price(BigDecimal);

impl Price {
    pub fn new(value: BigDecimal) -> Result<Self, ProductError> {
        if value < BigDecimal::zero() {
            return Err(ProductError::PriceNegative);
        }

        // Trailing zeros do not count as precision: 9.9900 is a valid price.
        let (_, scale) = value.normalized().as_bigint_and_exponent();
        if scale > MAX_PRICE_SCALE {
            return Err(ProductError::PriceTooPrecise);
        }

        Ok(Self(value))
    }

    /// Constructor for prices already persisted in the repository (no validation).
    pub fn from_repository(value: BigDecimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &BigDecimal {
        &self.0
    }

    pub fn into_inner(self) -> BigDecimal {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
