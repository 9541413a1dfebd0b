//! Snapshot persistence on top of a [`KeyValueStorage`].
//!
//! The full collection is written as one JSON array under a fixed key after
//! every mutation. Reads are tolerant: a missing, empty, unparsable or
//! non-array value yields an empty collection and a warning in the log.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use stockroom_core::{KeyValueStorage, StorageError, Theme};
use tracing::{debug, warn};

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Reads and writes the snapshot of one product line.
#[derive(Debug)]
pub struct SnapshotAdapter<R> {
    key: &'static str,
    _record: PhantomData<fn() -> R>,
}

impl<R> SnapshotAdapter<R>
where
    R: Serialize + DeserializeOwned,
{
    /// Create an adapter bound to `key`.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _record: PhantomData,
        }
    }

    /// The storage key this adapter owns.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Serialize the full collection and write it under the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend rejects the write.
    pub fn save<S: KeyValueStorage + ?Sized>(
        &self,
        storage: &mut S,
        records: &[R],
    ) -> Result<(), StorageError> {
        let json = encode(records);
        storage.set_item(self.key, &json)?;
        debug!(key = self.key, count = records.len(), "Saved snapshot");
        Ok(())
    }

    /// Read the collection back; never fails.
    ///
    /// Backend errors and malformed values are logged and treated as an
    /// empty collection.
    pub fn load<S: KeyValueStorage + ?Sized>(&self, storage: &S) -> Vec<R> {
        self.try_load(storage).unwrap_or_else(|e| {
            warn!(key = self.key, error = %e, "Failed to read snapshot, starting empty");
            Vec::new()
        })
    }

    /// Read the collection back, propagating backend errors.
    ///
    /// Malformed values are still treated as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be read.
    pub fn try_load<S: KeyValueStorage + ?Sized>(&self, storage: &S) -> Result<Vec<R>, StorageError> {
        Ok(storage
            .get_item(self.key)?
            .map(|raw| self.decode(&raw))
            .unwrap_or_default())
    }

    /// Whether a snapshot value exists under the key (even a malformed one).
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be read.
    pub fn exists<S: KeyValueStorage + ?Sized>(&self, storage: &S) -> Result<bool, StorageError> {
        Ok(storage.get_item(self.key)?.is_some())
    }

    /// Parse a raw snapshot value.
    #[must_use]
    pub fn decode(&self, raw: &str) -> Vec<R> {
        if raw.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str::<Vec<R>>(raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(key = self.key, error = %e, "Malformed snapshot, starting empty");
                Vec::new()
            }
        }
    }
}

/// Serialize records as a JSON array.
///
/// Plain data records cannot fail to serialize; a failure is logged and the
/// empty array written instead.
fn encode<R: Serialize>(records: &[R]) -> String {
    serde_json::to_string(records).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to serialize snapshot");
        "[]".to_owned()
    })
}

/// Read the theme preference; absent or unknown values read as light.
pub fn load_theme<S: KeyValueStorage + ?Sized>(storage: &S) -> Theme {
    match storage.get_item(THEME_KEY) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(e) => {
            warn!(error = %e, "Failed to read theme, using default");
            Theme::default()
        }
    }
}

/// Persist the theme preference.
///
/// # Errors
///
/// Returns an error if the storage backend rejects the write.
pub fn save_theme<S: KeyValueStorage + ?Sized>(
    storage: &mut S,
    theme: Theme,
) -> Result<(), StorageError> {
    storage.set_item(THEME_KEY, theme.as_str())
}
