//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Prices are always rendered with the currency symbol and exactly two
/// decimal digits:
///
/// ```
/// use deskgear_core::{CurrencyCode, Price};
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(65, 0), CurrencyCode::USD);
/// assert_eq!(price.display(), "$65.00");
/// ```
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

    /// Create a price in US dollars.
    #[must_use]
    pub const fn usd(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// The price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{}{:.2}",
            self.currency_code.symbol(),
            self.amount.round_dp(2)
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Adds two prices of the same currency.
///
/// Callers keep currencies uniform; the catalog rejects mixed-currency
/// product lists at construction.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(
            self.currency_code, rhs.currency_code,
            "cannot add prices in different currencies"
        );
        Self::new(self.amount + rhs.amount, self.currency_code)
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
}

impl CurrencyCode {
    /// The symbol printed before an amount.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_whole_amounts() {
        assert_eq!(Price::usd(Decimal::new(65, 0)).display(), "$65.00");
        assert_eq!(Price::usd(Decimal::new(350, 0)).display(), "$350.00");
    }

    #[test]
    fn test_display_pads_single_decimal() {
        assert_eq!(Price::usd(Decimal::new(455, 1)).display(), "$45.50");
    }

    #[test]
    fn test_display_keeps_cents() {
        assert_eq!(Price::usd(Decimal::new(19999, 2)).display(), "$199.99");
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(Price::zero(CurrencyCode::USD).display(), "$0.00");
    }

    #[test]
    fn test_display_uses_currency_symbol() {
        let price = Price::new(Decimal::new(1250, 2), CurrencyCode::GBP);
        assert_eq!(price.to_string(), "£12.50");
    }

    #[test]
    fn test_times() {
        let keyboard = Price::usd(Decimal::new(12000, 2));
        assert_eq!(keyboard.times(2).display(), "$240.00");
        assert_eq!(keyboard.times(0).display(), "$0.00");
    }

    #[test]
    fn test_add() {
        let total = Price::usd(Decimal::new(19999, 2)) + Price::usd(Decimal::new(4550, 2));
        assert_eq!(total.display(), "$245.49");
    }

    #[test]
    fn test_is_negative() {
        assert!(Price::usd(Decimal::new(-1, 2)).is_negative());
        assert!(!Price::usd(Decimal::ZERO).is_negative());
        assert!(!Price::usd(Decimal::new(1, 2)).is_negative());
    }

    #[test]
    fn test_default_currency_is_usd() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::USD);
        assert_eq!(CurrencyCode::default().code(), "USD");
    }

    #[test]
    fn test_serde_amount_as_string() {
        let price = Price::usd(Decimal::new(8999, 2));
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, r#"{"amount":"89.99","currency_code":"USD"}"#);
    }
}
