//! Mutation submitter: validates bookmark input and issues the create call.
//!
//! Validation happens before any network traffic. A store-assigned record
//! flows into the collection through the same insert path the feed uses,
//! which is what keeps the duplicate-echo race harmless.

use std::sync::Arc;

use url::Url;

use crate::managers::collection::BookmarkCollection;
use crate::store::RecordStore;
use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::{SubmitError, ValidationError};

/// Scheme prefixed when the user omits one.
const DEFAULT_SCHEME: &str = "https://";

/// Checks the trimmed title, rejecting empty input.
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Normalizes a URL string: trims, prefixes `https://` when no scheme is
/// present, and verifies the result parses as an absolute URL.
pub fn normalize_url(url: &str) -> Result<String, ValidationError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, trimmed)
    };
    Url::parse(&candidate)
        .map_err(|e| ValidationError::MalformedUrl(format!("{}: {}", trimmed, e)))?;
    Ok(candidate)
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The record was created and entered the visible collection; the
    /// caller may clear inputs and show the success indicator.
    Saved(Bookmark),
    /// The record was created but its feed echo landed first, so the
    /// collection already listed it. No success indicator should fire for
    /// a no-op insert.
    AlreadyListed(Bookmark),
}

/// Issues validated create requests on behalf of one user.
pub struct BookmarkSubmitter {
    store: Arc<dyn RecordStore>,
    user_id: String,
}

impl BookmarkSubmitter {
    pub fn new(store: Arc<dyn RecordStore>, user_id: impl Into<String>) -> Self {
        Self {
            store,
            user_id: user_id.into(),
        }
    }

    /// Validates the input, issues a single create request, and hands the
    /// stored record to the collection.
    ///
    /// Validation failures return before any store call; store failures
    /// leave the collection untouched. No retry is attempted.
    pub async fn submit(
        &self,
        collection: &mut BookmarkCollection,
        title: &str,
        url: &str,
    ) -> Result<SubmitOutcome, SubmitError> {
        let title = validate_title(title).map_err(SubmitError::Validation)?;
        let url = normalize_url(url).map_err(SubmitError::Validation)?;

        let record = self
            .store
            .create(NewBookmark {
                user_id: self.user_id.clone(),
                title,
                url,
            })
            .await
            .map_err(SubmitError::Store)?;

        if collection.insert(record.clone()) {
            Ok(SubmitOutcome::Saved(record))
        } else {
            Ok(SubmitOutcome::AlreadyListed(record))
        }
    }
}
