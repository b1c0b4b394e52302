// ABOUTME: HTTP store backend - session-oriented JSON API over reqwest.
// ABOUTME: Opens a session per write, inserts one row, deletes the session.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::config::StoreConfig;
use super::traits::{StoreConnection, StoreConnector};
use crate::booking::BookingRow;
use crate::error::StoreError;

/// Table bookings are inserted into.
const BOOKING_TABLE: &str = "booking";

/// Insert request body.
#[derive(Debug, Serialize)]
struct InsertRequest<'a> {
    table: &'a str,
    row: &'a BookingRow,
}

/// Session creation response.
#[derive(Debug, Deserialize)]
struct SessionResponse {
    session_id: String,
}

/// Error body returned by the store.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Decode a non-success response into a [`StoreError::Api`].
async fn api_error(response: reqwest::Response) -> StoreError {
    let status = response.status().as_u16();
    let message = match response.text().await {
        Ok(body) => match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) => body,
        },
        Err(e) => e.to_string(),
    };
    StoreError::Api { status, message }
}

/// Store backend speaking a session-oriented HTTP JSON protocol.
///
/// Each connect opens a fresh session against the configured database;
/// the session is deleted when the connection is closed. No sessions are
/// pooled or reused.
#[derive(Debug, Clone)]
pub struct HttpStore {
    config: StoreConfig,
    http: reqwest::Client,
}

impl HttpStore {
    /// Create a store for the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Create a store from `BOOKGATE_STORE_*` environment variables.
    pub fn from_env() -> Result<Self, StoreError> {
        Ok(Self::new(StoreConfig::from_env()?))
    }

    fn sessions_url(&self) -> String {
        format!(
            "{}/v1/databases/{}/sessions",
            self.config.address.trim_end_matches('/'),
            self.config.database
        )
    }
}

#[async_trait]
impl StoreConnector for HttpStore {
    async fn connect(&self) -> Result<Box<dyn StoreConnection>, StoreError> {
        let url = self.sessions_url();

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.user, Some(&self.config.password))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let session: SessionResponse = response.json().await?;
        tracing::debug!(session_id = %session.session_id, "store session opened");

        Ok(Box::new(HttpConnection {
            session_url: format!("{}/{}", url, session.session_id),
            user: self.config.user.clone(),
            password: self.config.password.clone(),
            http: self.http.clone(),
        }))
    }
}

/// One live session against an [`HttpStore`].
struct HttpConnection {
    session_url: String,
    user: String,
    password: String,
    http: reqwest::Client,
}

#[async_trait]
impl StoreConnection for HttpConnection {
    async fn insert(&mut self, row: &BookingRow) -> Result<(), StoreError> {
        let body = InsertRequest {
            table: BOOKING_TABLE,
            row,
        };

        let response = self
            .http
            .post(format!("{}/rows", self.session_url))
            .basic_auth(&self.user, Some(&self.password))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), StoreError> {
        let response = self
            .http
            .delete(&self.session_url)
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_sessions_url_from_config() {
        let store = HttpStore::new(StoreConfig::new(
            "http://localhost:3306/",
            "workshopdb",
            "root",
            "",
        ));
        assert_eq!(
            store.sessions_url(),
            "http://localhost:3306/v1/databases/workshopdb/sessions"
        );
    }

    #[test]
    fn test_insert_request_serialization() {
        let row = crate::booking::BookingRequest::new("Andi", "Ganti Oli")
            .stamp(Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap());
        let body = InsertRequest {
            table: BOOKING_TABLE,
            row: &row,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["table"], "booking");
        assert_eq!(json["row"]["customer_name"], "Andi");
        assert_eq!(json["row"]["service_type"], "Ganti Oli");
    }

    #[test]
    fn test_error_body_parsing() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message": "table missing"}"#).unwrap();
        assert_eq!(body.message, "table missing");
    }
}
