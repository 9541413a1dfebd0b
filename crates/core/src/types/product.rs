//! Product records for the two inventory lines.
//!
//! Both records serialize with camelCase keys and a numeric `price`, the
//! layout the persisted snapshot uses. The price is written with every
//! digit of the decimal, so a snapshot reads back to the same value.

use core::fmt;
use core::hash::Hash;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ProductId, TrackedProductId};

/// Read access shared by every inventory record.
///
/// Projection, statistics, rendering and export only go through this trait,
/// so they work for either product line.
pub trait Listing {
    /// Identifier type; unique within a collection.
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr;

    fn id(&self) -> Self::Id;
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    /// Description, `None` when absent or blank.
    fn description(&self) -> Option<&str>;
    fn quantity(&self) -> i64;
    fn price(&self) -> Decimal;

    /// `quantity × price`, saturating at the bounds of [`Decimal`].
    fn total_value(&self) -> Decimal {
        Decimal::from(self.quantity()).saturating_mul(self.price())
    }
}

/// Validated form payload used to create or replace a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: Decimal,
    pub description: Option<String>,
}

/// Classic inventory product with a time-based integer ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Build a product from a validated draft.
    #[must_use]
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            quantity: draft.quantity,
            price: draft.price,
            description: draft.description,
        }
    }
}

impl Listing for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn price(&self) -> Decimal {
        self.price
    }
}

/// Ledger inventory product with a random ID and audit timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedProduct {
    pub id: TrackedProductId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TrackedProduct {
    /// Build a new product; both timestamps are set to `now`.
    #[must_use]
    pub fn from_draft(id: TrackedProductId, draft: ProductDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            quantity: draft.quantity,
            price: draft.price,
            description: draft.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replacement record for an edit: keeps `id` and `created_at`,
    /// refreshes `updated_at`.
    #[must_use]
    pub fn revised(&self, draft: ProductDraft, now: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            ..Self::from_draft(self.id, draft, now)
        }
    }
}

impl Listing for TrackedProduct {
    type Id = TrackedProductId;

    fn id(&self) -> TrackedProductId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }

    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn price(&self) -> Decimal {
        self.price
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Laptop HP Pavilion".to_string(),
            category: "Electrónica".to_string(),
            quantity: 15,
            price: Decimal::from_str("899.99").unwrap(),
            description: None,
        }
    }

    #[test]
    fn test_product_json_layout() {
        let product = Product::from_draft(ProductId::new(1), draft());
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Laptop HP Pavilion",
                "category": "Electrónica",
                "quantity": 15,
                "price": 899.99
            })
        );
    }

    #[test]
    fn test_product_reads_browser_snapshot_entry() {
        let product: Product = serde_json::from_value(json!({
            "id": 1_700_000_000_003_i64,
            "name": "Café Premium 500g",
            "category": "Alimentos",
            "quantity": 3,
            "price": 15.99,
            "description": ""
        }))
        .unwrap();
        assert_eq!(product.price, Decimal::from_str("15.99").unwrap());
        assert_eq!(product.description(), None);
    }

    #[test]
    fn test_total_value() {
        let product = Product::from_draft(ProductId::new(1), draft());
        assert_eq!(product.total_value(), Decimal::from_str("13499.85").unwrap());
    }

    #[test]
    fn test_total_value_saturates() {
        let mut huge = draft();
        huge.quantity = i64::MAX;
        huge.price = Decimal::from_str("99999999999").unwrap();
        let product = Product::from_draft(ProductId::new(1), huge.clone());
        assert_eq!(product.total_value(), Decimal::MAX);

        huge.quantity = i64::MIN;
        let product = Product::from_draft(ProductId::new(1), huge);
        assert_eq!(product.total_value(), Decimal::MIN);
    }

    #[test]
    fn test_price_keeps_every_digit_through_json() {
        let mut precise = draft();
        precise.price = Decimal::from_str("1.00000000000000001").unwrap();
        let product = Product::from_draft(ProductId::new(1), precise);

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"price\":1.00000000000000001"), "{json}");
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_tracked_revision_keeps_created_at() {
        let created = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let edited = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        let original = TrackedProduct::from_draft(TrackedProductId::random(), draft(), created);

        let mut changes = draft();
        changes.quantity = 2;
        let revised = original.revised(changes, edited);

        assert_eq!(revised.id, original.id);
        assert_eq!(revised.created_at, created);
        assert_eq!(revised.updated_at, edited);
        assert_eq!(revised.quantity, 2);
    }

    #[test]
    fn test_tracked_json_uses_camel_case_timestamps() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let product = TrackedProduct::from_draft(TrackedProductId::random(), draft(), now);
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
