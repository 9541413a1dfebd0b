//! Create/edit form input and its coercion into a [`ProductDraft`].
//!
//! Numbers are coerced the lenient way form inputs are: leading whitespace
//! is skipped and the longest numeric prefix wins (`"12 units"` is 12,
//! `"3.7"` is a quantity of 3). Nothing else is validated; negative values
//! pass through.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockroom_core::{Listing, ProductDraft};
use thiserror::Error;

/// Reasons a submission is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("category cannot be empty")]
    EmptyCategory,
    #[error("quantity is not a number: {0:?}")]
    InvalidQuantity(String),
    #[error("price is not a number: {0:?}")]
    InvalidPrice(String),
}

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub description: String,
}

impl ProductForm {
    /// Prefill the form from an existing record (edit mode).
    #[must_use]
    pub fn from_record<R: Listing>(record: &R) -> Self {
        Self {
            name: record.name().to_owned(),
            category: record.category().to_owned(),
            quantity: record.quantity().to_string(),
            price: record.price().normalize().to_string(),
            description: record.description().unwrap_or_default().to_owned(),
        }
    }

    /// Coerce the fields into a draft.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] for an empty name or category, or a quantity
    /// or price without a numeric prefix.
    pub fn parse(&self) -> Result<ProductDraft, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(FormError::EmptyCategory);
        }
        let quantity = coerce_int(&self.quantity)
            .ok_or_else(|| FormError::InvalidQuantity(self.quantity.clone()))?;
        let price = coerce_decimal(&self.price)
            .ok_or_else(|| FormError::InvalidPrice(self.price.clone()))?;
        let description = self.description.trim();

        Ok(ProductDraft {
            name: name.to_owned(),
            category: category.to_owned(),
            quantity,
            price,
            description: (!description.is_empty()).then(|| description.to_owned()),
        })
    }
}

/// Longest leading `[+-]digits` prefix as an integer.
fn coerce_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s
        .get(sign_len..)?
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s.get(..sign_len + digits)?.parse().ok()
}

/// Longest leading `[+-]digits[.digits]` prefix as a decimal.
fn coerce_decimal(raw: &str) -> Option<Decimal> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let body = s.get(sign_len..)?;

    let int_digits = body.chars().take_while(char::is_ascii_digit).count();
    let frac_digits = body
        .get(int_digits..)
        .and_then(|rest| rest.strip_prefix('.'))
        .map_or(0, |rest| rest.chars().take_while(char::is_ascii_digit).count());
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    let len = if frac_digits > 0 {
        int_digits + 1 + frac_digits
    } else {
        int_digits
    };
    let number = body.get(..len)?;
    let number = if number.starts_with('.') {
        format!("0{number}")
    } else {
        number.to_owned()
    };
    let value = Decimal::from_str(&number).ok()?;
    Some(if s.starts_with('-') { -value } else { value })
}
