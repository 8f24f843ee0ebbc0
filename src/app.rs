//! Dashboard core.
//!
//! Owns one view's state and wiring: the authenticated session, the record
//! store client, the feed subscription, and the visible collection. Every
//! state change — local submission result, local deletion, pushed feed
//! event — funnels through the collection's idempotent operations, so the
//! two arrival paths of any mutation converge regardless of order.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::feed::{ChangeFeed, Subscription};
use crate::managers::collection::BookmarkCollection;
use crate::services::deleter::{BookmarkDeleter, DeleteOutcome};
use crate::services::submitter::{BookmarkSubmitter, SubmitOutcome};
use crate::store::RecordStore;
use crate::types::bookmark::Bookmark;
use crate::types::errors::{DashboardError, StoreError, SubmitError};
use crate::types::event::ChangeEvent;
use crate::types::session::Session;

/// One open dashboard view for an authenticated user.
pub struct Dashboard {
    session: Session,
    collection: BookmarkCollection,
    subscription: Option<Subscription>,
    submitter: BookmarkSubmitter,
    deleter: BookmarkDeleter,
}

impl Dashboard {
    /// Opens the dashboard: subscribes to the user's change feed, then
    /// loads the initial record list.
    ///
    /// Subscribing first means a mutation committed during the load shows
    /// up either in the list or as a queued event; the idempotent insert
    /// makes the overlap harmless. If the load fails, the already-acquired
    /// subscription is released by its guard on drop.
    pub async fn open(
        session: Session,
        store: Arc<dyn RecordStore>,
        feed: &dyn ChangeFeed,
    ) -> Result<Self, DashboardError> {
        let subscription = feed
            .subscribe(session.user_id())
            .await
            .map_err(DashboardError::Feed)?;
        let initial = store
            .list(session.user_id())
            .await
            .map_err(DashboardError::Store)?;
        info!(
            user_id = session.user_id(),
            records = initial.len(),
            "dashboard opened"
        );

        let submitter = BookmarkSubmitter::new(store.clone(), session.user_id());
        let deleter = BookmarkDeleter::new(store);
        Ok(Self {
            collection: BookmarkCollection::from_records(initial),
            subscription: Some(subscription),
            submitter,
            deleter,
            session,
        })
    }

    /// Validates and submits a new bookmark; see [`BookmarkSubmitter`].
    pub async fn add_bookmark(
        &mut self,
        title: &str,
        url: &str,
    ) -> Result<SubmitOutcome, SubmitError> {
        self.submitter
            .submit(&mut self.collection, title, url)
            .await
    }

    /// Presses the delete control for a record: arm first, then confirm
    /// within the window. A confirmed delete removes the record locally on
    /// the direct success path; the feed's delete event is absorbed
    /// idempotently when it arrives.
    pub async fn request_delete(&mut self, id: &str) -> Result<DeleteOutcome, StoreError> {
        let outcome = self.deleter.request_delete(id).await?;
        if outcome == DeleteOutcome::Deleted {
            self.collection.remove(id);
        }
        Ok(outcome)
    }

    /// Whether the delete control is currently armed for this record.
    pub fn is_delete_armed(&self, id: &str) -> bool {
        self.deleter.is_armed(id)
    }

    /// Drains pending feed events into the collection and returns how many
    /// changed state.
    ///
    /// Inserted records owned by another user are discarded: the store's
    /// access policy scopes the feed upstream, and the client never
    /// locally inserts foreign rows.
    pub fn pump(&mut self) -> usize {
        let Some(subscription) = self.subscription.as_mut() else {
            return 0;
        };
        let mut changed = 0;
        while let Some(event) = subscription.try_next() {
            if let ChangeEvent::Inserted(record) = &event {
                if record.user_id != self.session.user_id() {
                    warn!(record_id = %record.id, "discarding feed insert for foreign user");
                    continue;
                }
            }
            if self.collection.apply(event) {
                changed += 1;
            }
        }
        if changed > 0 {
            debug!(changed, "applied feed events");
        }
        changed
    }

    /// Records in visible order, newest first.
    pub fn bookmarks(&self) -> &[Bookmark] {
        self.collection.records()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn user_id(&self) -> &str {
        self.session.user_id()
    }

    /// Releases the feed subscription. Dropping the dashboard does the
    /// same; release happens exactly once either way.
    pub fn close(&mut self) {
        if self.subscription.take().is_some() {
            info!(user_id = self.session.user_id(), "dashboard closed");
        }
    }
}
