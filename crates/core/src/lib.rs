//! Stockroom Core - Shared types library.
//!
//! This crate provides common types used across all Stockroom components:
//! - `admin` - Inventory management product lines (classic and ledger)
//! - `storefront` - Jewelry catalog and cart demo
//! - `cli` - Command-line driver for both front-ends
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no file access, no
//! channels, no rendering. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, product records and stock policies
//! - [`storage`] - The key-value storage seam and an in-memory backend

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod storage;
pub mod types;

pub use storage::{KeyValueStorage, MemoryStorage, StorageError, StorageEvent};
pub use types::*;
