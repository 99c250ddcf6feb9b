//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g., reais).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Brazilian Real
    #[default]
    Brl,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
}

impl Currency {
    /// Display symbol placed before the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Brl => "R$",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    /// Thousands and decimal separators used when formatting.
    #[must_use]
    pub const fn separators(self) -> (char, char) {
        match self {
            Self::Usd => (',', '.'),
            Self::Brl | Self::Eur => ('.', ','),
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Formats the amount for display, rounded to cents.
    ///
    /// `Money::new(dec!(1500), Currency::Brl).format()` yields `R$ 1.500,00`.
    #[must_use]
    pub fn format(&self) -> String {
        let rounded = self.amount.round_dp(2);
        let text = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        let (group, decimal) = self.currency.separators();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        format!(
            "{sign}{} {}{decimal}{frac_part}",
            self.currency.symbol(),
            group_thousands(int_part, group)
        )
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), Currency::Brl, "R$ 0,00")]
    #[case(dec!(1500), Currency::Brl, "R$ 1.500,00")]
    #[case(dec!(350.5), Currency::Brl, "R$ 350,50")]
    #[case(dec!(1234567.891), Currency::Brl, "R$ 1.234.567,89")]
    #[case(dec!(-42.1), Currency::Brl, "-R$ 42,10")]
    #[case(dec!(999.999), Currency::Brl, "R$ 1.000,00")]
    #[case(dec!(1500), Currency::Usd, "$ 1,500.00")]
    #[case(dec!(100000), Currency::Eur, "€ 100.000,00")]
    fn test_money_format(#[case] amount: Decimal, #[case] currency: Currency, #[case] expected: &str) {
        assert_eq!(Money::new(amount, currency).format(), expected);
    }

    #[test]
    fn test_currency_reads_iso_codes() {
        let currency: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(currency, Currency::Usd);
        assert_eq!(Money::new(dec!(2), currency).to_string(), "$ 2.00");
    }
}
