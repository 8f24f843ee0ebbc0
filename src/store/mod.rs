//! Record store layer.
//!
//! The remote relational service holding bookmark rows, behind a narrow
//! async interface. [`HttpRecordStore`] talks to the real platform;
//! [`MemoryStore`] is the in-process implementation used by tests and the
//! demo binary.

pub mod http;
pub mod memory;

use async_trait::async_trait;

use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::StoreError;

pub use http::HttpRecordStore;
pub use memory::MemoryStore;

/// Async interface to the remote record store.
///
/// `create` returns the stored row with id and creation timestamp assigned.
/// `delete` succeeds even when the id no longer exists: the platform's
/// row-filter delete is a no-op on zero matches, and local removal is
/// idempotent on top of it.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create(&self, new: NewBookmark) -> Result<Bookmark, StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
    async fn list(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError>;
}
