//! Shared storage with cross-context change notifications.
//!
//! One [`LocalStorage`] plays the role of the browser's per-origin storage.
//! Each execution context (a tab in the browser) opens its own
//! [`StorageArea`]. A write through one area is visible to all areas
//! immediately and queues a [`StorageEvent`] for every *other* area; the
//! writer itself is not notified.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use stockroom_core::{KeyValueStorage, StorageError, StorageEvent};
use tokio::sync::broadcast;
use tracing::warn;

/// Pending notifications kept per area before the oldest are dropped.
const EVENT_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
struct Notification {
    origin: u64,
    event: StorageEvent,
}

#[derive(Debug)]
struct Shared {
    items: Mutex<HashMap<String, String>>,
    events: broadcast::Sender<Notification>,
    next_area: AtomicU64,
}

impl Shared {
    fn items(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, origin: u64, event: StorageEvent) {
        // Only fails when no area is open, in which case nobody is listening.
        let _ = self.events.send(Notification { origin, event });
    }
}

/// Storage shared by every context of one origin.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    shared: Arc<Shared>,
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorage {
    /// Create an empty shared storage.
    #[must_use]
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                items: Mutex::new(HashMap::new()),
                events,
                next_area: AtomicU64::new(1),
            }),
        }
    }

    /// Open a storage area for a new execution context.
    ///
    /// The area only sees change events written after it was opened.
    #[must_use]
    pub fn open_area(&self) -> StorageArea {
        StorageArea {
            id: self.shared.next_area.fetch_add(1, Ordering::Relaxed),
            shared: Arc::clone(&self.shared),
            events: self.shared.events.subscribe(),
        }
    }
}

/// One context's handle on a [`LocalStorage`].
#[derive(Debug)]
pub struct StorageArea {
    id: u64,
    shared: Arc<Shared>,
    events: broadcast::Receiver<Notification>,
}

impl StorageArea {
    /// Remove every key, notifying other contexts with a clear event.
    pub fn clear(&mut self) {
        let had_items = {
            let mut items = self.shared.items();
            let had_items = !items.is_empty();
            items.clear();
            had_items
        };
        if had_items {
            self.shared.notify(
                self.id,
                StorageEvent {
                    key: None,
                    old_value: None,
                    new_value: None,
                },
            );
        }
    }
}

impl KeyValueStorage for StorageArea {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.shared.items().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let old_value = self
            .shared
            .items()
            .insert(key.to_owned(), value.to_owned());
        if old_value.as_deref() != Some(value) {
            self.shared.notify(
                self.id,
                StorageEvent {
                    key: Some(key.to_owned()),
                    old_value,
                    new_value: Some(value.to_owned()),
                },
            );
        }
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let old_value = self.shared.items().remove(key);
        if old_value.is_some() {
            self.shared.notify(
                self.id,
                StorageEvent {
                    key: Some(key.to_owned()),
                    old_value,
                    new_value: None,
                },
            );
        }
        Ok(())
    }

    fn take_changes(&mut self) -> Vec<StorageEvent> {
        let mut changes = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(notification) => {
                    if notification.origin != self.id {
                        changes.push(notification.event);
                    }
                }
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    // Missed events cannot be replayed; a clear forces a full reload.
                    warn!(area = self.id, skipped, "Storage events dropped, forcing reload");
                    changes.push(StorageEvent {
                        key: None,
                        old_value: None,
                        new_value: None,
                    });
                }
                Err(
                    broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed,
                ) => break,
            }
        }
        changes
    }
}
