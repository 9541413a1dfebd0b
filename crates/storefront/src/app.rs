//! Storefront event loop.

use rust_decimal::Decimal;
use stockroom_core::CatalogItemId;
use tracing::{info, instrument, warn};

use crate::cart::Cart;
use crate::catalog::{Catalog, CatalogFilter, Category, Material};
use crate::render::{StorefrontView, render};

/// Everything a shopper can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopEvent {
    FilterCategory(Option<Category>),
    FilterMaterial(Option<Material>),
    SetMaxPrice(Option<Decimal>),
    /// "Hacer pedido" on a catalog card.
    Order(CatalogItemId),
    ToggleCart,
}

/// Result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopDispatch {
    pub view: StorefrontView,
    /// Confirmation shown after an order.
    pub alert: Option<String>,
}

/// Storefront state: the catalog, the cart and the current filters.
#[derive(Debug, Clone, Default)]
pub struct ShopApp {
    catalog: Catalog,
    cart: Cart,
    filter: CatalogFilter,
    cart_open: bool,
}

impl ShopApp {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: ShopEvent) -> ShopDispatch {
        let alert = match event {
            ShopEvent::FilterCategory(category) => {
                self.filter.category = category;
                None
            }
            ShopEvent::FilterMaterial(material) => {
                self.filter.material = material;
                None
            }
            ShopEvent::SetMaxPrice(max_price) => {
                self.filter.max_price = max_price;
                None
            }
            ShopEvent::Order(id) => match self.cart.add_to_cart(&self.catalog, id) {
                Ok(quantity) => {
                    let name = self.catalog.get(id).map(|item| item.name.as_str()).unwrap_or_default();
                    info!(%id, quantity, "Added to cart");
                    Some(format!("✅ Pedido hecho: {name}"))
                }
                Err(e) => {
                    warn!(error = %e, "Ignoring order");
                    None
                }
            },
            ShopEvent::ToggleCart => {
                self.cart_open = !self.cart_open;
                None
            }
        };

        ShopDispatch {
            view: self.view(),
            alert,
        }
    }

    #[must_use]
    pub fn view(&self) -> StorefrontView {
        let products = self.catalog.filter(&self.filter);
        render(&products, &self.filter, &self.cart, self.cart_open)
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
