//! Stockroom Storefront library.
//!
//! A static jewelry catalog with category, material and price filters, and
//! an add-only cart. Prices are shown in Colombian pesos.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod cart;
pub mod catalog;
pub mod filters;
pub mod render;

pub use app::{ShopApp, ShopDispatch, ShopEvent};
pub use cart::{Cart, CartError, CartLine};
pub use catalog::{Catalog, CatalogFilter, CatalogItem, Category, Material};
