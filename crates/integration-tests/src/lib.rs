//! Integration tests for Stockroom.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stockroom-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `inventory_store` - Store and snapshot invariants (property-based)
//! - `inventory_views` - Projection, statistics, badges and CSV export
//! - `cross_context` - Two contexts sharing one storage
//! - `file_storage` - The inventory over the file backend
//! - `storefront` - Catalog filters and cart
//!
//! This library only holds shared fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use stockroom_admin::form::ProductForm;
use stockroom_core::{Product, ProductDraft, ProductId};

/// A fixed instant so generated IDs and timestamps are reproducible.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_760_000_000_000)
        .single()
        .unwrap_or_default()
}

/// Draft with the given fields and no description.
#[must_use]
pub fn draft(name: &str, category: &str, quantity: i64, price: Decimal) -> ProductDraft {
    ProductDraft {
        name: name.to_owned(),
        category: category.to_owned(),
        quantity,
        price,
        description: None,
    }
}

/// Classic product with the given fields.
#[must_use]
pub fn product(id: i64, name: &str, category: &str, quantity: i64, price: Decimal) -> Product {
    Product::from_draft(ProductId::new(id), draft(name, category, quantity, price))
}

/// Form fields as a user would type them.
#[must_use]
pub fn form(name: &str, category: &str, quantity: &str, price: &str) -> ProductForm {
    ProductForm {
        name: name.to_owned(),
        category: category.to_owned(),
        quantity: quantity.to_owned(),
        price: price.to_owned(),
        description: String::new(),
    }
}

/// Three jewelry items: two rings and a necklace.
#[must_use]
pub fn jewelry_fixture() -> Vec<Product> {
    vec![
        product(1, "Anillo de Mariposa", "rings", 3, Decimal::from(500)),
        product(2, "Collar de Perlas", "necklaces", 45, Decimal::from(700)),
        product(3, "Anillo de Flores", "rings", 15, Decimal::from(450)),
    ]
}
