//! Stockroom Admin library.
//!
//! The inventory management front-end, as a library driven by events. Two
//! product lines share the same code:
//!
//! - [`line::Classic`] - integer IDs, fixed low-stock threshold
//! - [`line::Ledger`] - UUIDs, audit timestamps, tiered stock badges
//!
//! # Flow
//!
//! [`app::InventoryApp::dispatch`] mutates the [`store::InventoryStore`],
//! saves the snapshot through [`persistence::SnapshotAdapter`] and renders
//! an [`render::InventoryView`] from the [`projection`] of the collection.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod export;
pub mod form;
pub mod line;
pub mod persistence;
pub mod projection;
pub mod render;
pub mod storage;
pub mod store;

pub use app::{AdminEvent, Dispatch, InventoryApp, Notice, NoticeLevel};
pub use line::{Classic, Ledger, LineKind, ProductLine};
