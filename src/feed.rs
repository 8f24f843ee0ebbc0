//! Change feed subscription.
//!
//! The record store pushes row-level insert/delete notifications to
//! subscribed clients, scoped by owning user. A [`Subscription`] is a
//! scoped resource: dropping it unregisters the subscriber, after which no
//! further events are delivered.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::types::errors::FeedError;
use crate::types::event::ChangeEvent;

/// Push channel delivering row-level change notifications for one user's
/// records.
#[async_trait]
pub trait ChangeFeed: Send + Sync {
    async fn subscribe(&self, user_id: &str) -> Result<Subscription, FeedError>;
}

/// A live feed subscription.
///
/// Held by the dashboard for the lifetime of the view. The release guard
/// runs on drop — on every exit path, exactly once.
pub struct Subscription {
    events: mpsc::UnboundedReceiver<ChangeEvent>,
    _guard: SubscriptionGuard,
}

impl Subscription {
    /// Wraps a receiver with a release action invoked when the subscription
    /// is dropped.
    pub fn new(
        events: mpsc::UnboundedReceiver<ChangeEvent>,
        on_release: Box<dyn FnOnce() + Send>,
    ) -> Self {
        Self {
            events,
            _guard: SubscriptionGuard {
                on_release: Some(on_release),
            },
        }
    }

    /// Pops the next pending event without blocking.
    pub fn try_next(&mut self) -> Option<ChangeEvent> {
        self.events.try_recv().ok()
    }

    /// Waits for the next event. Returns `None` once the feed side is gone.
    pub async fn next(&mut self) -> Option<ChangeEvent> {
        self.events.recv().await
    }
}

struct SubscriptionGuard {
    on_release: Option<Box<dyn FnOnce() + Send>>,
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        if let Some(release) = self.on_release.take() {
            release();
        }
    }
}
