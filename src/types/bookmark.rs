use serde::{Deserialize, Serialize};
use url::Url;

/// A saved bookmark row, as assigned by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub url: String,
    /// Creation time in unix epoch milliseconds, assigned by the store.
    pub created_at: i64,
}

impl Bookmark {
    /// Host of the bookmarked URL without a leading `www.`, for display.
    /// Falls back to the raw URL string if it does not parse.
    pub fn domain(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| {
                u.host_str()
                    .map(|h| h.trim_start_matches("www.").to_string())
            })
            .unwrap_or_else(|| self.url.clone())
    }

    /// Compact relative age label: "just now", "5m ago", "3h ago", "2d ago",
    /// "6w ago".
    pub fn age_label(&self, now_ms: i64) -> String {
        let mins = (now_ms - self.created_at).max(0) / 60_000;
        if mins < 1 {
            return "just now".to_string();
        }
        if mins < 60 {
            return format!("{}m ago", mins);
        }
        let hours = mins / 60;
        if hours < 24 {
            return format!("{}h ago", hours);
        }
        let days = hours / 24;
        if days < 7 {
            return format!("{}d ago", days);
        }
        format!("{}w ago", days / 7)
    }
}

/// Payload for creating a bookmark. The id and creation timestamp are
/// assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBookmark {
    pub user_id: String,
    pub title: String,
    pub url: String,
}
