// ABOUTME: Defines the store boundary traits - connector and connection.
// ABOUTME: A connection is a one-shot handle: insert, then close exactly once.

use async_trait::async_trait;

use crate::booking::BookingRow;
use crate::error::StoreError;

/// Obtains connections to a backing store.
///
/// Pure acquisition: no retries, no pooling. Each call is independent and
/// the trait is safe to call from any number of concurrent contexts;
/// serializing access to the store is the write gate's job, not the
/// connector's.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    /// Establish a fresh connection.
    async fn connect(&self) -> Result<Box<dyn StoreConnection>, StoreError>;
}

/// Exclusive access to the backing store for the duration of one write.
///
/// Owned solely by the submit execution that acquired it. `close` consumes
/// the handle, so a connection cannot be released twice or retained after
/// release.
#[async_trait]
pub trait StoreConnection: Send {
    /// Insert one booking row.
    async fn insert(&mut self, row: &BookingRow) -> Result<(), StoreError>;

    /// Release the connection.
    async fn close(self: Box<Self>) -> Result<(), StoreError>;
}
