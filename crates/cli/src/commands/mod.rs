//! CLI command implementations.

pub mod inventory;
pub mod shop;
pub mod theme;
