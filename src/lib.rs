//! Shelfmark — real-time personal bookmark dashboard core.
//!
//! A thin, testable core over a managed backend: validated bookmark
//! submission, confirmed deletion, and a single idempotent reconciliation
//! point merging local mutation results with the store's push change feed.

pub mod app;
pub mod feed;
pub mod managers;
pub mod services;
pub mod store;
pub mod types;
