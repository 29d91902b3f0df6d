//! Type-safe price representation using decimal arithmetic.
//!
//! Prices only exist for display: the cart multiplies a unit price by a line
//! quantity and sums the lines. There is no tax or discount logic.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Price of `quantity` units at this unit price.
    ///
    /// Saturates instead of overflowing; a cart line never gets near the
    /// limit in practice.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(
            self.amount.saturating_mul(Decimal::from(quantity)),
            self.currency_code,
        )
    }

    /// Add another amount of the same currency.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self::new(self.amount.saturating_add(other.amount), self.currency_code)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    KRW,
}

/// Error returned when parsing an unsupported currency code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported currency code: {0}")]
pub struct CurrencyCodeError(pub String);

impl CurrencyCode {
    /// Symbol printed before the amount.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::KRW => "₩",
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            "KRW" => Ok(Self::KRW),
            _ => Err(CurrencyCodeError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_cents() {
        let price = Price::new(Decimal::new(105, 1), CurrencyCode::USD);
        assert_eq!(price.display(), "$10.50");
        assert_eq!(Price::zero(CurrencyCode::EUR).to_string(), "€0.00");
    }

    #[test]
    fn test_times_and_plus() {
        let unit = Price::new(Decimal::new(1999, 2), CurrencyCode::USD);
        let line = unit.times(3);
        assert_eq!(line.amount, Decimal::new(5997, 2));

        let total = line.plus(&unit);
        assert_eq!(total.display(), "$79.96");
    }

    #[test]
    fn test_times_saturates() {
        let unit = Price::new(Decimal::MAX, CurrencyCode::USD);
        assert_eq!(unit.times(2).amount, Decimal::MAX);
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!(" GBP ".parse::<CurrencyCode>().unwrap(), CurrencyCode::GBP);
        assert!(matches!(
            "XYZ".parse::<CurrencyCode>(),
            Err(CurrencyCodeError(code)) if code == "XYZ"
        ));
    }
}
