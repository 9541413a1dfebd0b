//! Product lines: the per-variant configuration of the inventory app.
//!
//! Both lines share the store, projection, persistence and rendering code and
//! differ only in what this trait pins down.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use stockroom_core::{
    CurrencyCode, Listing, Product, ProductDraft, ProductId, StockPolicy, TrackedProduct,
    TrackedProductId,
};

use crate::projection::SearchScope;

/// Variant-specific behaviour of an inventory front-end.
pub trait ProductLine {
    /// Record type stored in the snapshot.
    type Record: Listing + Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned;

    /// Short name used in logs and on the command line.
    const NAME: &'static str;
    /// Storage key of the snapshot.
    const STORAGE_KEY: &'static str;
    /// Fields the search box matches.
    const SEARCH_SCOPE: SearchScope;
    /// Low-stock classification.
    const STOCK_POLICY: StockPolicy;
    /// Currency used to display prices.
    const CURRENCY: CurrencyCode = CurrencyCode::USD;

    /// Build a new record with an ID unique among `existing`.
    fn create(draft: ProductDraft, existing: &[Self::Record], now: DateTime<Utc>) -> Self::Record;

    /// Build the replacement for `current` after an edit.
    fn revise(current: &Self::Record, draft: ProductDraft, now: DateTime<Utc>) -> Self::Record;

    /// Demo records written on first run.
    fn samples(now: DateTime<Utc>) -> Vec<Self::Record>;
}

/// Classic line: time-based integer IDs, threshold of 10, search over name
/// and description.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classic;

/// Ledger line: UUIDs, audit timestamps, tiered stock badges, search over
/// name only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ledger;

impl ProductLine for Classic {
    type Record = Product;

    const NAME: &'static str = "classic";
    const STORAGE_KEY: &'static str = "inventory";
    const SEARCH_SCOPE: SearchScope = SearchScope::NameAndDescription;
    const STOCK_POLICY: StockPolicy = StockPolicy::CLASSIC;

    fn create(draft: ProductDraft, existing: &[Product], now: DateTime<Utc>) -> Product {
        let id = ProductId::next_after(now, existing.iter().map(|p| p.id));
        Product::from_draft(id, draft)
    }

    fn revise(current: &Product, draft: ProductDraft, _now: DateTime<Utc>) -> Product {
        Product::from_draft(current.id, draft)
    }

    fn samples(now: DateTime<Utc>) -> Vec<Product> {
        let mut records: Vec<Product> = Vec::new();
        for draft in sample_drafts() {
            let record = Self::create(draft, &records, now);
            records.push(record);
        }
        records
    }
}

impl ProductLine for Ledger {
    type Record = TrackedProduct;

    const NAME: &'static str = "ledger";
    const STORAGE_KEY: &'static str = "inventory_ledger";
    const SEARCH_SCOPE: SearchScope = SearchScope::Name;
    const STOCK_POLICY: StockPolicy = StockPolicy::TIERED;

    fn create(draft: ProductDraft, existing: &[TrackedProduct], now: DateTime<Utc>) -> TrackedProduct {
        let mut id = TrackedProductId::random();
        while existing.iter().any(|p| p.id == id) {
            id = TrackedProductId::random();
        }
        TrackedProduct::from_draft(id, draft, now)
    }

    fn revise(current: &TrackedProduct, draft: ProductDraft, now: DateTime<Utc>) -> TrackedProduct {
        current.revised(draft, now)
    }

    fn samples(now: DateTime<Utc>) -> Vec<TrackedProduct> {
        let mut records: Vec<TrackedProduct> = Vec::new();
        for draft in sample_drafts() {
            let record = Self::create(draft, &records, now);
            records.push(record);
        }
        records
    }
}

fn sample_drafts() -> [ProductDraft; 3] {
    [
        ProductDraft {
            name: "Laptop HP Pavilion".to_owned(),
            category: "Electrónica".to_owned(),
            quantity: 15,
            price: Decimal::new(89999, 2),
            description: Some("Laptop de alto rendimiento con procesador Intel Core i7".to_owned()),
        },
        ProductDraft {
            name: "Camiseta Nike Pro".to_owned(),
            category: "Ropa".to_owned(),
            quantity: 45,
            price: Decimal::new(2999, 2),
            description: Some("Camiseta deportiva de alta calidad".to_owned()),
        },
        ProductDraft {
            name: "Café Premium 500g".to_owned(),
            category: "Alimentos".to_owned(),
            quantity: 3,
            price: Decimal::new(1599, 2),
            description: Some("Café gourmet tostado artesanalmente".to_owned()),
        },
    ]
}

/// Runtime selector for a product line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineKind {
    #[default]
    Classic,
    Ledger,
}

impl LineKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => Classic::NAME,
            Self::Ledger => Ledger::NAME,
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "classic" => Ok(Self::Classic),
            "ledger" => Ok(Self::Ledger),
            _ => Err(format!("invalid product line: {s} (expected classic or ledger)")),
        }
    }
}
