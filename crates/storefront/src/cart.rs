//! Shopping cart.
//!
//! Lines are only ever added or incremented; there is no removal.

use rust_decimal::Decimal;
use serde::Serialize;
use stockroom_core::CatalogItemId;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogItem};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("catalog item not found: {0}")]
    UnknownItem(CatalogItemId),
}

/// One cart line, copied from the catalog item when first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub id: CatalogItemId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    fn from_item(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            quantity: 1,
        }
    }

    /// Price times quantity, saturating at the bounds of [`Decimal`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a catalog item and return the line's new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownItem`] if the ID is not in the catalog;
    /// the cart is left unchanged.
    pub fn add_to_cart(&mut self, catalog: &Catalog, id: CatalogItemId) -> Result<u32, CartError> {
        let item = catalog.get(id).ok_or(CartError::UnknownItem(id))?;
        Ok(self.add_item(item))
    }

    /// Add one unit of `item`, incrementing its line if present.
    pub fn add_item(&mut self, item: &CatalogItem) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLine::from_item(item));
        1
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price times quantity.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |count: u32, line| count.saturating_add(line.quantity))
    }
}
