//! HTTP record store client.
//!
//! Talks to a PostgREST-style REST surface: one table of bookmark rows,
//! filtered row operations, representation returned on insert. Row-level
//! access control is enforced by the platform; this client only presents
//! credentials.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::debug;

use crate::services::settings::StoreSettings;
use crate::store::RecordStore;
use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::StoreError;
use crate::types::session::AccessToken;

/// REST client for the remote record store.
pub struct HttpRecordStore {
    client: reqwest::Client,
    base_url: String,
    table: String,
}

impl HttpRecordStore {
    /// Builds a client carrying the platform API key and the session's
    /// bearer token on every request.
    pub fn new(settings: &StoreSettings, token: &AccessToken) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&settings.api_key)
                .map_err(|e| StoreError::Rejected(format!("invalid api key: {}", e)))?,
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.reveal()))
            .map_err(|e| StoreError::Rejected(format!("invalid access token: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            table: settings.table.clone(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// Maps a non-2xx response to `StoreError::Rejected` with the body
    /// attached, since the platform reports constraint and policy failures
    /// there.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected(format!("{}: {}", status, body)))
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn create(&self, new: NewBookmark) -> Result<Bookmark, StoreError> {
        debug!(table = %self.table, "create bookmark row");
        let response = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=representation")
            .json(&new)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;

        let rows: Vec<Bookmark> = response
            .json()
            .await
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Rejected("insert returned no representation".to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        debug!(table = %self.table, id = %id, "delete bookmark row");
        let response = self
            .client
            .delete(self.table_url())
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn list(&self, user_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let response = self
            .client
            .get(self.table_url())
            .query(&[
                ("user_id", format!("eq.{}", user_id)),
                ("order", "created_at.desc".to_string()),
                ("select", "*".to_string()),
            ])
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }
}
