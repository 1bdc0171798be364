use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::Signed;

use super::validation::ValidationError;

/// Store-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// A validated, strictly positive decimal price.
///
/// The decimal keeps the scale it was written with, so `"23.30"` is
/// rendered back as `"23.30"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price(BigDecimal);

impl Price {
    /// Parses raw transport text into a price.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a decimal
    /// number fails with `PriceNotNumeric`; zero and negative amounts fail
    /// with `PriceNotPositive`. The stored amount is the parsed decimal, not
    /// the raw text, so `"1e2"` renders as `"100"` and `".5"` as `"0.5"`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        // An exponent whose scale does not fit in i64 fails here too, even
        // when the written number would be positive.
        let amount =
            BigDecimal::from_str(raw.trim()).map_err(|_| ValidationError::PriceNotNumeric)?;

        if !amount.is_positive() {
            return Err(ValidationError::PriceNotPositive);
        }

        Ok(Self(amount))
    }

    /// Wraps an amount read back from storage (no validation).
    pub fn from_repository(amount: BigDecimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
