//! Storage backends for the inventory front-ends.
//!
//! - [`LocalStorage`] / [`StorageArea`] - shared in-process storage with one
//!   area per execution context and cross-context change events
//! - [`FileStorage`] - one file per key under a data directory, used by the
//!   command-line driver
//!
//! The in-memory single-context backend lives in `stockroom_core`.

mod file;
mod local;

pub use file::FileStorage;
pub use local::{LocalStorage, StorageArea};
