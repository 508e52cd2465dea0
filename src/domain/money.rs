use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A payment amount.
///
/// Wraps `rust_decimal::Decimal` so amounts and rates cannot be mixed up.
/// Callers are expected to pass non-negative values; nothing here enforces it.
/// The value is normalized on construction, so `1.50` is stored as `1.5`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value.normalize())
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An exchange rate as broadcast by a `CurrencyExchange`.
///
/// Rates are conceptually floating-point. Fixed-point `Decimal` stands in for
/// `f64` here so a broadcast rate prints exactly as it was set. Normalized on
/// construction like `Amount`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    pub fn new(value: Decimal) -> Self {
        Self(value.normalize())
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Rate {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<Rate> for Decimal {
    fn from(rate: Rate) -> Self {
        rate.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_display_drops_trailing_zeros() {
        assert_eq!(Amount::new(dec!(100)).to_string(), "100");
        assert_eq!(Amount::new(dec!(100.00)).to_string(), "100");
        assert_eq!(Amount::new(dec!(12.50)).to_string(), "12.5");
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::new(dec!(1.2)).to_string(), "1.2");
        assert_eq!(Rate::new(dec!(1.40)).to_string(), "1.4");
    }

    #[test]
    fn test_construction_normalizes() {
        assert_eq!(Amount::from(dec!(12.50)).value().to_string(), "12.5");
        assert_eq!(Rate::new(dec!(1.30)).value().to_string(), "1.3");
        assert_eq!(Rate::from(dec!(2.000)).value().scale(), 0);
    }

    #[test]
    fn test_zero_amount_is_accepted() {
        let amount = Amount::from(dec!(0));
        assert_eq!(amount, Amount::ZERO);
        assert_eq!(Decimal::from(amount), Decimal::ZERO);
    }
}
