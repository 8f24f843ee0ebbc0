//! In-memory record store with an attached change feed.
//!
//! Fills the role the managed platform fills in production: rows with
//! store-assigned ids and timestamps, owner-scoped queries, and push
//! notifications to every subscriber of the owning user — including the
//! session that originated the mutation, which is the echo case the
//! reconciler must absorb. Used by tests and the demo binary.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::feed::{ChangeFeed, Subscription};
use crate::store::RecordStore;
use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::{FeedError, StoreError};
use crate::types::event::ChangeEvent;

/// Shared in-process store + feed. Clones share the same rows and
/// subscribers, so several sessions can be driven against one store.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

struct Inner {
    rows: Mutex<Vec<Bookmark>>,
    subscribers: Mutex<Vec<Subscriber>>,
    next_subscriber_id: AtomicU64,
    last_created_at: Mutex<i64>,
    offline: AtomicBool,
}

struct Subscriber {
    id: u64,
    user_id: String,
    sender: mpsc::UnboundedSender<ChangeEvent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                rows: Mutex::new(Vec::new()),
                subscribers: Mutex::new(Vec::new()),
                next_subscriber_id: AtomicU64::new(0),
                last_created_at: Mutex::new(0),
                offline: AtomicBool::new(false),
            }),
        }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Simulates loss of connectivity: while offline, every store call
    /// fails with a network error and no state changes.
    pub fn set_offline(&self, offline: bool) {
        self.inner.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of live feed subscriptions, for lifecycle assertions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().unwrap().len()
    }

    /// Total rows across all users.
    pub fn row_count(&self) -> usize {
        self.inner.rows.lock().unwrap().len()
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.inner.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Network("store unreachable".to_string()));
        }
        Ok(())
    }

    fn publish(&self, user_id: &str, event: ChangeEvent) {
        let subscribers = self.inner.subscribers.lock().unwrap();
        for sub in subscribers.iter().filter(|s| s.user_id == user_id) {
            // A receiver dropped without unsubscribing just misses events.
            let _ = sub.sender.send(event.clone());
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    /// Commits a new row with a fresh id and a strictly increasing creation
    /// timestamp, then notifies the owner's subscribers.
    async fn create(&self, new: NewBookmark) -> Result<Bookmark, StoreError> {
        self.check_online()?;

        let record = {
            // Strictly increasing timestamps keep the visible order
            // deterministic even for back-to-back creates.
            let mut last = self.inner.last_created_at.lock().unwrap();
            let created_at = Self::now_ms().max(*last + 1);
            *last = created_at;

            let record = Bookmark {
                id: Uuid::new_v4().to_string(),
                user_id: new.user_id,
                title: new.title,
                url: new.url,
                created_at,
            };
            self.inner.rows.lock().unwrap().push(record.clone());
            record
        };

        self.publish(&record.user_id, ChangeEvent::Inserted(record.clone()));
        Ok(record)
    }

    /// Removes the row if present and notifies the owner's subscribers.
    /// Deleting a missing row is a no-op, same as the platform's filter
    /// delete.
    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.check_online()?;

        let removed = {
            let mut rows = self.inner.rows.lock().unwrap();
            rows.iter()
                .position(|r| r.id == id)
                .map(|idx| rows.remove(idx))
        };

        if let Some(row) = removed {
            self.publish(&row.user_id, ChangeEvent::Deleted { id: row.id.clone() });
        }
        Ok(())
    }

    /// Rows owned by the given user, newest first.
    async fn list(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        self.check_online()?;

        let rows = self.inner.rows.lock().unwrap();
        let mut records: Vec<Bookmark> = rows
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

#[async_trait]
impl ChangeFeed for MemoryStore {
    /// Registers a subscriber for the user's row changes. The returned
    /// subscription unregisters itself when dropped.
    async fn subscribe(&self, user_id: &str) -> Result<Subscription, FeedError> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = self.inner.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.lock().unwrap().push(Subscriber {
            id,
            user_id: user_id.to_string(),
            sender,
        });

        let inner = Arc::downgrade(&self.inner);
        let on_release = Box::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.subscribers.lock().unwrap().retain(|s| s.id != id);
            }
        });
        Ok(Subscription::new(receiver, on_release))
    }
}
