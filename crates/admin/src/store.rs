//! In-memory inventory collection.
//!
//! The store owns the ordered list of records for one product line. It does
//! not persist anything itself; the app saves a snapshot after every
//! mutation.

use stockroom_core::Listing;

/// Ordered collection of inventory records, kept in insertion order.
#[derive(Debug, Clone)]
pub struct InventoryStore<R> {
    records: Vec<R>,
}

impl<R> Default for InventoryStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Listing> InventoryStore<R> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from a loaded snapshot.
    #[must_use]
    pub const fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Append a record.
    pub fn add(&mut self, record: R) {
        self.records.push(record);
    }

    /// Replace the record whose ID matches `id`, keeping its position.
    ///
    /// Returns `false` (and leaves the store untouched) if no record matches.
    pub fn update(&mut self, id: R::Id, record: R) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove the record whose ID matches `id`.
    ///
    /// Returns the removed record, or `None` if no record matches.
    pub fn delete(&mut self, id: R::Id) -> Option<R> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }

    /// Look up a record by ID.
    #[must_use]
    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Whether a record with this ID exists.
    #[must_use]
    pub fn contains(&self, id: R::Id) -> bool {
        self.get(id).is_some()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn all(&self) -> &[R] {
        &self.records
    }

    /// IDs of all records in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = R::Id> + '_ {
        self.records.iter().map(Listing::id)
    }

    /// Replace the whole collection (bulk reload from a snapshot).
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.records = records;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
