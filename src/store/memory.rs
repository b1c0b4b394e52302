// ABOUTME: In-process store backend recording rows behind a mutex.
// ABOUTME: Supports failure and latency injection for demos and tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::traits::{StoreConnection, StoreConnector};
use crate::booking::BookingRow;
use crate::error::StoreError;

/// State shared by a store and every connection it hands out.
#[derive(Default)]
struct Shared {
    rows: Mutex<Vec<BookingRow>>,
    connects: AtomicUsize,
    inserts: AtomicUsize,
    releases: AtomicUsize,
    open: AtomicUsize,
    max_open: AtomicUsize,
}

/// An in-process booking store.
///
/// Rows land in a shared vector; clones observe the same rows and
/// counters. The `with_*` builders inject failures and latency into the
/// connect, insert, and close paths, which is how the demo runs without a
/// real store and how the gate's contract is exercised in tests.
#[derive(Clone, Default)]
pub struct MemoryStore {
    shared: Arc<Shared>,
    connect_failure: Option<String>,
    insert_failure: Option<String>,
    release_failure: Option<String>,
    connect_delay: Option<Duration>,
    insert_delay: Option<Duration>,
}

impl MemoryStore {
    /// Create an empty store that accepts every operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `connect` fail with the given reason.
    pub fn with_connect_failure(mut self, reason: impl Into<String>) -> Self {
        self.connect_failure = Some(reason.into());
        self
    }

    /// Make every `insert` fail with the given reason.
    pub fn with_insert_failure(mut self, reason: impl Into<String>) -> Self {
        self.insert_failure = Some(reason.into());
        self
    }

    /// Make every `close` fail with the given reason.
    pub fn with_release_failure(mut self, reason: impl Into<String>) -> Self {
        self.release_failure = Some(reason.into());
        self
    }

    /// Delay every `connect` by the given duration.
    pub fn with_connect_delay(mut self, delay: Duration) -> Self {
        self.connect_delay = Some(delay);
        self
    }

    /// Delay every `insert` by the given duration.
    pub fn with_insert_delay(mut self, delay: Duration) -> Self {
        self.insert_delay = Some(delay);
        self
    }

    /// Snapshot of the persisted rows.
    pub async fn rows(&self) -> Vec<BookingRow> {
        self.shared.rows.lock().await.clone()
    }

    /// Number of connect attempts.
    pub fn connects(&self) -> usize {
        self.shared.connects.load(Ordering::SeqCst)
    }

    /// Number of insert attempts.
    pub fn inserts(&self) -> usize {
        self.shared.inserts.load(Ordering::SeqCst)
    }

    /// Number of close attempts.
    pub fn releases(&self) -> usize {
        self.shared.releases.load(Ordering::SeqCst)
    }

    /// Highest number of simultaneously open connections observed.
    pub fn max_open(&self) -> usize {
        self.shared.max_open.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoreConnector for MemoryStore {
    async fn connect(&self) -> Result<Box<dyn StoreConnection>, StoreError> {
        if let Some(delay) = self.connect_delay {
            tokio::time::sleep(delay).await;
        }

        self.shared.connects.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = &self.connect_failure {
            return Err(StoreError::Backend(anyhow::anyhow!("{}", reason)));
        }

        let open = self.shared.open.fetch_add(1, Ordering::SeqCst) + 1;
        self.shared.max_open.fetch_max(open, Ordering::SeqCst);

        Ok(Box::new(MemoryConnection {
            shared: self.shared.clone(),
            insert_failure: self.insert_failure.clone(),
            release_failure: self.release_failure.clone(),
            insert_delay: self.insert_delay,
        }))
    }
}

/// One live handle to a [`MemoryStore`].
struct MemoryConnection {
    shared: Arc<Shared>,
    insert_failure: Option<String>,
    release_failure: Option<String>,
    insert_delay: Option<Duration>,
}

#[async_trait]
impl StoreConnection for MemoryConnection {
    async fn insert(&mut self, row: &BookingRow) -> Result<(), StoreError> {
        self.shared.inserts.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.insert_delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(reason) = &self.insert_failure {
            return Err(StoreError::Backend(anyhow::anyhow!("{}", reason)));
        }

        self.shared.rows.lock().await.push(row.clone());
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), StoreError> {
        self.shared.releases.fetch_add(1, Ordering::SeqCst);
        self.shared.open.fetch_sub(1, Ordering::SeqCst);

        if let Some(reason) = &self.release_failure {
            return Err(StoreError::Backend(anyhow::anyhow!("{}", reason)));
        }

        Ok(())
    }
}
