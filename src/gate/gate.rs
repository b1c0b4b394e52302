// ABOUTME: The write gate - admits one booking write to the store at a time.
// ABOUTME: Each write acquires a fresh connection and always releases it.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::booking::{BookingRequest, SubmitReceipt, WriteOutcome};
use crate::store::StoreConnector;

/// Serializes booking writes to a shared backing store.
///
/// Any number of tasks may call [`submit`](Self::submit) concurrently; the
/// gate guarantees that the acquire-write-release sequences of two calls
/// never interleave. Waiting callers are admitted in whatever order the
/// runtime wakes them - no fairness is promised.
///
/// # Resource Lifecycle
///
/// Every admitted call acquires a fresh connection, stamps the row with
/// the current time, inserts it, and closes the connection before the next
/// caller is admitted. The close runs on the failure path too; a close
/// error is reported on the receipt's secondary channel and never replaces
/// the write outcome.
pub struct WriteGate {
    connector: Arc<dyn StoreConnector>,
    entry: Mutex<()>,
}

impl WriteGate {
    /// Create a gate in front of the given store.
    pub fn new(connector: Arc<dyn StoreConnector>) -> Self {
        Self {
            connector,
            entry: Mutex::new(()),
        }
    }

    /// Submit one booking for writing.
    ///
    /// Blocks while another submission holds the store, then performs the
    /// whole acquire-write-release sequence exclusively. All failures are
    /// recovered into the returned receipt; one caller's failure never
    /// affects another's submission.
    pub async fn submit(&self, request: BookingRequest) -> SubmitReceipt {
        let _entry = self.entry.lock().await;

        let mut conn = match self.connector.connect().await {
            Ok(conn) => conn,
            Err(e) => {
                // Nothing was acquired, so there is nothing to release.
                return SubmitReceipt::connection_failure(e.to_string());
            }
        };

        // Stamped here rather than at submission so the recorded time is
        // the time the store actually saw the write.
        let row = request.stamp(Utc::now());

        let outcome = match conn.insert(&row).await {
            Ok(()) => WriteOutcome::Success,
            Err(e) => WriteOutcome::WriteFailure {
                reason: e.to_string(),
            },
        };

        // The connection is released no matter how the insert ended.
        let release_error = match conn.close().await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(
                    customer = %row.customer_name,
                    error = %e,
                    "failed to release store connection"
                );
                Some(e.to_string())
            }
        };

        SubmitReceipt::completed(outcome, release_error)
    }
}
