use serde::{Deserialize, Serialize};

use crate::types::bookmark::Bookmark;

/// A row-level change pushed by the record store's change feed.
///
/// Both event kinds are applied through the same reconciliation point as
/// the direct call results, so redundant delivery is harmless.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeEvent {
    /// A new row was committed; carries the full record.
    Inserted(Bookmark),
    /// A row was removed; carries the identifier only.
    Deleted { id: String },
}
