//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a type-safe integer ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_i64()`
/// - `From<i64>`, `Into<i64>` and `FromStr` implementations
///
/// # Example
///
/// ```rust
/// # use stockroom_core::define_id;
/// define_id!(ShelfId);
/// define_id!(BinId);
///
/// let shelf = ShelfId::new(1);
/// let bin = BinId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ShelfId = bin;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CatalogItemId);

impl ProductId {
    /// Next time-based ID: the timestamp in milliseconds, bumped past every
    /// ID in `existing` so two products created within the same millisecond
    /// still get distinct IDs.
    ///
    /// When an existing ID is already `i64::MAX` there is nothing above it,
    /// so the highest free ID below it is used instead.
    #[must_use]
    pub fn next_after(now: DateTime<Utc>, existing: impl IntoIterator<Item = Self>) -> Self {
        let candidate = now.timestamp_millis();
        let taken: BTreeSet<i64> = existing.into_iter().map(|id| id.0).collect();
        let Some(&highest) = taken.last() else {
            return Self(candidate);
        };
        match highest.checked_add(1) {
            Some(floor) => Self(candidate.max(floor)),
            None => Self(
                (i64::MIN..highest)
                    .rev()
                    .find(|id| !taken.contains(id))
                    .unwrap_or(i64::MIN),
            ),
        }
    }
}

/// Random identifier for ledger products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackedProductId(Uuid);

impl TrackedProductId {
    /// Generate a new random (v4) ID.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TrackedProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TrackedProductId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_product_id_uses_timestamp_when_free() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let id = ProductId::next_after(now, []);
        assert_eq!(id.as_i64(), 1_700_000_000_000);
    }

    #[test]
    fn test_product_id_bumps_past_existing() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let existing = [ProductId::new(1_700_000_000_000), ProductId::new(42)];
        let id = ProductId::next_after(now, existing);
        assert_eq!(id.as_i64(), 1_700_000_000_001);
    }

    #[test]
    fn test_product_id_never_repeats_at_the_top_of_the_range() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let existing = [ProductId::new(i64::MAX), ProductId::new(i64::MAX - 1), ProductId::new(5)];
        let id = ProductId::next_after(now, existing);
        assert_eq!(id.as_i64(), i64::MAX - 2);
    }

    #[test]
    fn test_product_id_serde_transparent() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_product_id_from_str() {
        let id: ProductId = " 123 ".parse().unwrap();
        assert_eq!(id, ProductId::new(123));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_tracked_id_roundtrip_through_string() {
        let id = TrackedProductId::random();
        let parsed: TrackedProductId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
