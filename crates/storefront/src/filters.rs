//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::Decimal;
use stockroom_core::{CurrencyCode, Price};

/// Format an amount in Colombian pesos (`$ 500.000,00`).
#[must_use]
pub fn format_cop(amount: Decimal) -> String {
    Price::new(amount, CurrencyCode::COP).display()
}

/// Formats a decimal amount as Colombian pesos.
///
/// Values that are not numbers are passed through unchanged.
///
/// Usage in templates: `{{ item.price|cop }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn cop(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = amount.to_string();
    Ok(Decimal::from_str(&raw).map_or(raw, format_cop))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cop() {
        assert_eq!(format_cop(Decimal::from(500_000)), "$ 500.000,00");
        assert_eq!(format_cop(Decimal::from(1_500_000)), "$ 1.500.000,00");
        assert_eq!(format_cop(Decimal::ZERO), "$ 0,00");
    }
}
